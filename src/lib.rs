//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! ```
//! use ascii_chart::{RenderOptions, plot};
//!
//! let opts = RenderOptions::builder().height(3).build()?;
//! let chart = plot(&[0, 2, 4], &opts)?;
//! assert_eq!(chart.lines().count(), 3);
//! # Ok::<(), ascii_chart::ChartError>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, ColorId, ColorMap, ColorPair},
    config::{ColorSpec, LabelFormat, RenderOptions, RenderOptionsBuilder},
    data::{Series, Value},
    error::{ArgumentError, ChartError, DimensionError},
};

pub use render::{Composer, Grid, LineRenderer};

/// Plot one series with the built-in colour table.  Integers and floats are
/// both accepted and widened to `f64`.
pub fn plot<T: Value>(series: &[T], options: &RenderOptions) -> Result<String, ChartError> {
    let values: Series = series.iter().map(|&v| Some(v.to_f64())).collect();
    LineRenderer::default().plot(&values, options)
}

/// Overlay several equal-length series; `None` marks a gap.  Where two
/// series draw into the same cell the later one is shown.
pub fn multi_plot<S>(batch: &[S], options: &RenderOptions) -> Result<String, ChartError>
where
    S: AsRef<[Option<f64>]>,
{
    Composer::default().plot(batch, options)
}
