//! xterm-256 colour lookup.  Identifiers resolve to an escape pair
//! (start, reset) that wraps drawn glyphs.

use std::{collections::HashMap, fmt, str, sync::LazyLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    UnknownName(String),
    OutOfRange(i64),
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 12], len: u8 },
}

impl AnsiCode {
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// 256-colour foreground escape `ESC[38;5;Nm`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn indexed(n: u8) -> Self {
        let mut buf = [0u8; 12];
        buf[..7].copy_from_slice(b"\x1b[38;5;");
        let mut len = 7;
        len += write_u8(&mut buf[len..], n);
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII above
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Identifiers ---

/// A colour as the caller names it: an xterm name or a raw 0-255 code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorId {
    Name(String),
    Code(i64),
}

impl From<&str> for ColorId {
    fn from(s: &str) -> Self {
        Self::Name(s.to_owned())
    }
}

impl From<String> for ColorId {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl From<u8> for ColorId {
    fn from(n: u8) -> Self {
        Self::Code(i64::from(n))
    }
}

impl From<i32> for ColorId {
    fn from(n: i32) -> Self {
        Self::Code(i64::from(n))
    }
}

impl From<i64> for ColorId {
    fn from(n: i64) -> Self {
        Self::Code(n)
    }
}

/// Integers become codes, anything else a name.  Never fails; validity is
/// checked by [`ColorMap::lookup`].
impl str::FromStr for ColorId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Ok(t.parse::<i64>()
            .map_or_else(|_| Self::Name(t.to_owned()), Self::Code))
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(s) => f.write_str(s),
            Self::Code(n) => write!(f, "{n}"),
        }
    }
}

// --- Lookup ---

/// Start + reset escapes for one resolved colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub start: AnsiCode,
    pub reset: AnsiCode,
}

impl ColorPair {
    #[inline]
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{text}{}", self.start, self.reset)
    }
}

/// Immutable name → xterm index table.
#[derive(Debug, Clone)]
pub struct ColorMap {
    names: HashMap<String, u8>,
    reset: AnsiCode,
}

/// xterm names for the system colours plus a handful of common cube/ramp
/// entries.  Aliases map onto the nearest system colour.
pub const XTERM_NAMES: &[(&str, u8)] = &[
    ("black", 0),
    ("maroon", 1),
    ("green", 2),
    ("olive", 3),
    ("navy", 4),
    ("purple", 5),
    ("teal", 6),
    ("silver", 7),
    ("grey", 8),
    ("gray", 8),
    ("red", 9),
    ("lime", 10),
    ("yellow", 11),
    ("blue", 12),
    ("fuchsia", 13),
    ("magenta", 13),
    ("aqua", 14),
    ("cyan", 14),
    ("white", 15),
    ("grey0", 16),
    ("navy_blue", 17),
    ("dark_blue", 18),
    ("blue1", 21),
    ("dark_green", 22),
    ("green4", 28),
    ("green3", 34),
    ("green1", 46),
    ("cyan1", 51),
    ("dark_red", 52),
    ("blue_violet", 57),
    ("orange4", 94),
    ("red3", 160),
    ("dark_orange3", 166),
    ("red1", 196),
    ("magenta1", 201),
    ("orange_red1", 202),
    ("dark_orange", 208),
    ("orange1", 214),
    ("orange", 214),
    ("gold1", 220),
    ("yellow1", 226),
    ("grey100", 231),
    ("grey3", 232),
    ("grey50", 244),
    ("grey93", 255),
];

static XTERM: LazyLock<ColorMap> =
    LazyLock::new(|| ColorMap::new(XTERM_NAMES.iter().copied(), AnsiCode::reset()));

impl ColorMap {
    pub fn new<I, S>(names: I, reset: AnsiCode) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|(name, idx)| (normalize(name.as_ref()), idx))
                .collect(),
            reset,
        }
    }

    /// Built-in table, shared by every render.
    #[must_use]
    pub fn xterm() -> &'static Self {
        &XTERM
    }

    pub fn lookup(&self, id: &ColorId) -> Result<ColorPair, ColorError> {
        let idx = match id {
            ColorId::Name(name) => *self
                .names
                .get(&normalize(name))
                .ok_or_else(|| ColorError::UnknownName(name.clone()))?,
            ColorId::Code(n) => u8::try_from(*n).map_err(|_| ColorError::OutOfRange(*n))?,
        };
        Ok(ColorPair {
            start: AnsiCode::indexed(idx),
            reset: self.reset,
        })
    }

    /// Names sorted by xterm index, then alphabetically.
    #[must_use]
    pub fn names(&self) -> Vec<(&str, u8)> {
        let mut v: Vec<_> = self.names.iter().map(|(k, &i)| (k.as_str(), i)).collect();
        v.sort_unstable_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
        v
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::UnknownName(n) => write!(f, "unknown xterm color name `{n}`"),
            ColorError::OutOfRange(n) => write!(f, "invalid xterm color number `{n}`"),
        }
    }
}
impl std::error::Error for ColorError {}
