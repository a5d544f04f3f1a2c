//! Render options + fluent builder.

use std::{fmt, str::FromStr};

use crate::core::{
    color::ColorId,
    constants::{DEFAULT_FORMAT, MIN_ROWS},
    error::{ArgumentError, ChartError, DimensionError},
};

// --- Label format ---

/// printf-style numeric template, e.g. `"%8.2f "`.
///
/// Grammar: `[prefix]%[flags][width][.precision]f[suffix]`, flags drawn from
/// `-` (left align), `+` (always sign), ` ` (blank for positives) and `0`
/// (zero pad).  `%%` is a literal percent sign anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    prefix: String,
    suffix: String,
    width: usize,
    precision: usize,
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
}

impl LabelFormat {
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let p = self.precision;
        let mut num = if self.plus {
            format!("{value:+.p$}")
        } else if self.space && !value.is_sign_negative() {
            format!(" {value:.p$}")
        } else {
            format!("{value:.p$}")
        };

        let len = num.chars().count();
        if len < self.width {
            let pad = self.width - len;
            if self.left {
                num.extend(std::iter::repeat_n(' ', pad));
            } else if self.zero && value.is_finite() {
                let at = usize::from(num.starts_with(['+', '-', ' ']));
                num.insert_str(at, &"0".repeat(pad));
            } else {
                num.insert_str(0, &" ".repeat(pad));
            }
        }
        format!("{}{num}{}", self.prefix, self.suffix)
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: " ".to_owned(),
            width: 8,
            precision: 2,
            left: false,
            plus: false,
            space: false,
            zero: false,
        }
    }
}

/// Copy literal text up to the next lone `%`, unescaping `%%`.
/// Returns the literal and the rest starting *after* the `%`, if any.
fn take_literal(s: &str) -> (String, Option<&str>) {
    let mut out = String::new();
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '%' {
            if chars.peek().is_some_and(|&(_, n)| n == '%') {
                chars.next();
                out.push('%');
            } else {
                return (out, Some(&s[i + 1..]));
            }
        } else {
            out.push(c);
        }
    }
    (out, None)
}

/// Leading digit run (0 when absent).  `None` if the run overflows.
fn take_digits(s: &str) -> Option<(usize, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let n = if end == 0 { 0 } else { s[..end].parse().ok()? };
    Some((n, &s[end..]))
}

impl FromStr for LabelFormat {
    type Err = ArgumentError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        let bad = || ArgumentError::BadFormat(template.to_owned());

        let (prefix, rest) = take_literal(template);
        let mut rest = rest.ok_or_else(bad)?;

        let mut fmt = Self {
            prefix,
            suffix: String::new(),
            width: 0,
            precision: 6,
            left: false,
            plus: false,
            space: false,
            zero: false,
        };

        // flags
        loop {
            match rest.chars().next() {
                Some('-') => fmt.left = true,
                Some('+') => fmt.plus = true,
                Some(' ') => fmt.space = true,
                Some('0') => fmt.zero = true,
                _ => break,
            }
            rest = &rest[1..];
        }

        let (width, r) = take_digits(rest).ok_or_else(bad)?;
        fmt.width = width;
        rest = r;

        if let Some(r) = rest.strip_prefix('.') {
            let (precision, r) = take_digits(r).ok_or_else(bad)?;
            fmt.precision = precision;
            rest = r;
        }

        rest = rest.strip_prefix('f').ok_or_else(bad)?;

        let (suffix, tail) = take_literal(rest);
        if tail.is_some() {
            // only one directive per template
            return Err(bad());
        }
        fmt.suffix = suffix;
        Ok(fmt)
    }
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let esc = |s: &str| s.replace('%', "%%");
        write!(f, "{}%", esc(&self.prefix))?;
        for (on, c) in [
            (self.left, '-'),
            (self.plus, '+'),
            (self.space, ' '),
            (self.zero, '0'),
        ] {
            if on {
                write!(f, "{c}")?;
            }
        }
        if self.width > 0 {
            write!(f, "{}", self.width)?;
        }
        write!(f, ".{}f{}", self.precision, esc(&self.suffix))
    }
}

// --- Colour selection ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// One colour for every series drawn.
    Single(ColorId),
    /// One colour per series, in batch order.
    PerSeries(Vec<ColorId>),
}

// --- Options ---

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Extra left margin before the axis gutter.
    pub offset: usize,
    pub format: LabelFormat,
    /// Fixed row count; derived from the value range when `None`.
    pub height: Option<usize>,
    pub color: Option<ColorSpec>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            format: LabelFormat::default(),
            height: None,
            color: None,
        }
    }
}

impl RenderOptions {
    #[inline]
    #[must_use]
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    /// Same options, one fixed colour (or none).
    #[must_use]
    pub(crate) fn with_color(&self, color: Option<ColorId>) -> Self {
        Self {
            color: color.map(ColorSpec::Single),
            ..self.clone()
        }
    }

    #[must_use]
    pub(crate) fn with_height(&self, height: usize) -> Self {
        Self {
            height: Some(height),
            ..self.clone()
        }
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    offset: usize,
    format: Option<String>,
    height: Option<usize>,
    color: Option<ColorSpec>,
}

impl RenderOptionsBuilder {
    #[inline]
    #[must_use]
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, n: usize) -> Self {
        self.height = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn height_opt(mut self, n: Option<usize>) -> Self {
        self.height = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: impl Into<ColorId>) -> Self {
        self.color = Some(ColorSpec::Single(c.into()));
        self
    }
    #[inline]
    #[must_use]
    pub fn colors<I, C>(mut self, cs: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorId>,
    {
        self.color = Some(ColorSpec::PerSeries(
            cs.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn build(self) -> Result<RenderOptions, ChartError> {
        let format = match self.format {
            Some(t) => t.parse()?,
            None => DEFAULT_FORMAT.parse()?,
        };
        if let Some(h) = self.height {
            if h < MIN_ROWS {
                return Err(DimensionError::TooFewRows(h).into());
            }
        }
        Ok(RenderOptions {
            offset: self.offset,
            format,
            height: self.height,
            color: self.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(t: &str) -> LabelFormat {
        t.parse().unwrap()
    }

    #[test]
    fn default_template_matches_default_struct() {
        assert_eq!(fmt(DEFAULT_FORMAT), LabelFormat::default());
        assert_eq!(LabelFormat::default().format(4.0), "    4.00 ");
        assert_eq!(LabelFormat::default().format(-12.5), "  -12.50 ");
    }

    #[test]
    fn flags() {
        assert_eq!(fmt("%-6.1f|").format(3.0), "3.0   |");
        assert_eq!(fmt("%+.0f").format(7.0), "+7");
        assert_eq!(fmt("%06.2f").format(-1.5), "-01.50");
        assert_eq!(fmt("% .1f").format(2.0), " 2.0");
    }

    #[test]
    fn literals_and_escapes() {
        let f = fmt("cpu %5.1f%%");
        assert_eq!(f.format(42.0), "cpu  42.0%");
        assert_eq!(fmt("%f").format(1.0), "1.000000");
        assert_eq!(fmt("%5.f").format(2.0), "    2");
    }

    #[test]
    fn display_parses_back() {
        for t in ["%8.2f ", "x%-+3.0fy", "%%%.4f%%"] {
            let f = fmt(t);
            assert_eq!(fmt(&f.to_string()), f, "template {t}");
        }
    }

    #[test]
    fn rejects_garbage() {
        for t in [
            "",
            "no directive",
            "%8.2d",
            "%f %f",
            "%8.2",
            "%99999999999999999999.2f",
            "%8.99999999999999999999f",
        ] {
            assert!(t.parse::<LabelFormat>().is_err(), "accepted {t:?}");
        }
    }

    #[test]
    fn builder_validates() {
        let opts = RenderOptions::builder()
            .offset(3)
            .height(4)
            .format("%5.1f ")
            .colors(["red", "blue"])
            .build()
            .unwrap();
        assert_eq!(opts.offset, 3);
        assert_eq!(opts.height, Some(4));
        assert_eq!(
            opts.color,
            Some(ColorSpec::PerSeries(vec!["red".into(), "blue".into()]))
        );

        assert!(matches!(
            RenderOptions::builder().height(1).build(),
            Err(ChartError::InvalidDimensions(DimensionError::TooFewRows(1)))
        ));
        assert!(matches!(
            RenderOptions::builder().format("%q").build(),
            Err(ChartError::InvalidArgument(ArgumentError::BadFormat(_)))
        ));
    }

    #[test]
    fn builder_defaults_equal_default() {
        assert_eq!(
            RenderOptions::builder().build().unwrap(),
            RenderOptions::default()
        );
    }
}
