//! One series → one [`Grid`].
//!
//! ### Workflow
//! 1. Validate the series and options, resolve the colour.
//! 2. Pick a row count and the value span of one row (`step`).
//! 3. Write one label + axis mark per row into the gutter.
//! 4. For each adjacent pair of present values, quantize both to rows and
//!    draw either a horizontal run or a corner pair joined by verticals.

use std::borrow::Cow;

use crate::{
    core::{
        bounds::value_range,
        color::{ColorMap, ColorPair},
        config::{ColorSpec, RenderOptions},
        constants::{
            AUTO_HEIGHT_MAX, AUTO_HEIGHT_MIN, AXIS_MARK, AXIS_OFFSET, DECREASING_HI,
            DECREASING_LO, DEFAULT_HEIGHT, HORIZONTAL, INCREASING_HI, INCREASING_LO, MIN_ROWS,
            VERTICAL,
        },
        error::{ArgumentError, ChartError, DimensionError},
    },
    render::grid::{Cell, Grid},
};

/// Row count for a value range when the caller did not fix one.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn auto_rows(interval: f64) -> usize {
    if (AUTO_HEIGHT_MIN..=AUTO_HEIGHT_MAX).contains(&interval) {
        interval.ceil() as usize
    } else {
        DEFAULT_HEIGHT
    }
}

/// Row index of `value`, row 0 being the top (`max`).
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(max: f64, value: f64, step: f64, rows: usize) -> usize {
    if step == 0.0 {
        return 0;
    }
    let r = ((max - value) / step).round().max(0.0) as usize;
    r.min(rows - 1)
}

/// Every present value must be finite.
pub(crate) fn check_finite(series: &[Option<f64>], which: usize) -> Result<(), ArgumentError> {
    match series.iter().position(|v| v.is_some_and(|x| !x.is_finite())) {
        Some(index) => Err(ArgumentError::NonFinite {
            series: which,
            index,
        }),
        None => Ok(()),
    }
}

pub struct LineRenderer<'m> {
    colors: &'m ColorMap,
}

impl Default for LineRenderer<'static> {
    fn default() -> Self {
        Self::new(ColorMap::xterm())
    }
}

impl<'m> LineRenderer<'m> {
    #[must_use]
    pub fn new(colors: &'m ColorMap) -> Self {
        Self { colors }
    }

    fn resolve_color(&self, choice: Option<&ColorSpec>) -> Result<Option<ColorPair>, ChartError> {
        let id = match choice {
            None => return Ok(None),
            Some(ColorSpec::Single(id)) => id,
            Some(ColorSpec::PerSeries(ids)) => match ids.as_slice() {
                [id] => id,
                _ => {
                    return Err(ArgumentError::ColorCountMismatch {
                        colors: ids.len(),
                        series: 1,
                    }
                    .into());
                }
            },
        };
        Ok(Some(self.colors.lookup(id)?))
    }

    pub fn render(&self, series: &[Option<f64>], opts: &RenderOptions) -> Result<Grid, ChartError> {
        check_finite(series, 0)?;
        if opts.offset > series.len() {
            return Err(ArgumentError::OffsetOutOfRange {
                offset: opts.offset,
                len: series.len(),
            }
            .into());
        }
        let color = self.resolve_color(opts.color.as_ref())?;

        let present = series.iter().flatten().count();
        let (min, max) = match value_range(series) {
            Some(r) if present >= 2 => r,
            _ => return Err(DimensionError::TooFewPoints(present).into()),
        };
        let interval = (max - min).abs();
        if !interval.is_finite() {
            return Err(ArgumentError::RangeOverflow { min, max }.into());
        }

        let rows = opts.height.unwrap_or_else(|| auto_rows(interval));
        if rows < MIN_ROWS {
            return Err(DimensionError::TooFewRows(rows).into());
        }
        #[allow(clippy::cast_precision_loss)]
        let step = interval / (rows - 1) as f64;
        let offset = opts.offset + AXIS_OFFSET;

        let mut grid = Grid::blank(rows, series.len() + offset);

        // gutter
        for y in 0..rows {
            #[allow(clippy::cast_precision_loss)]
            let label = opts.format.format(max - y as f64 * step);
            let label_x = offset.saturating_sub(label.chars().count());
            grid.set(y, label_x, label);
            grid.set(y, label_x + 1, AXIS_MARK);
        }

        let ink = |glyph: &'static str| -> Cell {
            match &color {
                Some(pair) => Cow::Owned(pair.wrap(glyph)),
                None => Cow::Borrowed(glyph),
            }
        };

        // payload
        for (x, pair) in series.windows(2).enumerate() {
            let (Some(a), Some(b)) = (pair[0], pair[1]) else {
                continue;
            };
            let col = x + offset;
            let curr = quantize(max, a, step, rows);
            let next = quantize(max, b, step, rows);

            if curr == next {
                grid.set(curr, col, ink(HORIZONTAL));
                continue;
            }

            let (hi, lo) = if curr < next {
                (DECREASING_HI, DECREASING_LO)
            } else {
                (INCREASING_HI, INCREASING_LO)
            };
            grid.set(curr, col, ink(hi));
            grid.set(next, col, ink(lo));
            for y in curr.min(next) + 1..curr.max(next) {
                grid.set(y, col, ink(VERTICAL));
            }
        }

        Ok(grid)
    }

    pub fn plot(&self, series: &[Option<f64>], opts: &RenderOptions) -> Result<String, ChartError> {
        Ok(self.render(series, opts)?.to_string())
    }
}
