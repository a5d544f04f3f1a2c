//! Several equal-length series drawn into one grid.
//!
//! Each series is rendered on its own (own min/max and labels), then the
//! grids are painted over each other in batch order.  Where two series put
//! ink in the same cell the later one wins.

use crate::{
    core::{
        bounds::batch_range,
        color::{ColorId, ColorMap},
        config::{ColorSpec, RenderOptions},
        error::{ArgumentError, ChartError},
    },
    render::{
        grid::Grid,
        line::{LineRenderer, auto_rows, check_finite},
    },
};

pub struct Composer<'m> {
    line: LineRenderer<'m>,
}

impl Default for Composer<'static> {
    fn default() -> Self {
        Self::new(ColorMap::xterm())
    }
}

/// Colour for each series, in batch order.
fn per_series_colors(
    choice: Option<&ColorSpec>,
    series: usize,
) -> Result<Vec<Option<ColorId>>, ArgumentError> {
    match choice {
        None => Ok(vec![None; series]),
        Some(ColorSpec::Single(id)) => Ok(vec![Some(id.clone()); series]),
        Some(ColorSpec::PerSeries(ids)) if ids.len() == series => {
            Ok(ids.iter().cloned().map(Some).collect())
        }
        Some(ColorSpec::PerSeries(ids)) => Err(ArgumentError::ColorCountMismatch {
            colors: ids.len(),
            series,
        }),
    }
}

fn validate<S: AsRef<[Option<f64>]>>(batch: &[S]) -> Result<(), ArgumentError> {
    let first = batch.first().ok_or(ArgumentError::EmptyBatch)?;
    let len = first.as_ref().len();
    if batch.iter().any(|s| s.as_ref().len() != len) {
        return Err(ArgumentError::LengthMismatch {
            lengths: batch.iter().map(|s| s.as_ref().len()).collect(),
        });
    }
    batch
        .iter()
        .enumerate()
        .try_for_each(|(i, s)| check_finite(s.as_ref(), i))
}

impl<'m> Composer<'m> {
    #[must_use]
    pub fn new(colors: &'m ColorMap) -> Self {
        Self {
            line: LineRenderer::new(colors),
        }
    }

    pub fn render<S: AsRef<[Option<f64>]>>(
        &self,
        batch: &[S],
        opts: &RenderOptions,
    ) -> Result<Grid, ChartError> {
        validate(batch)?;
        let colors = per_series_colors(opts.color.as_ref(), batch.len())?;

        // one row count for the whole batch so the grids line up
        let shared = match opts.height {
            Some(_) => opts.clone(),
            None => batch_range(batch).map_or_else(
                || opts.clone(),
                |(lo, hi)| opts.with_height(auto_rows(hi - lo)),
            ),
        };

        let mut grids = batch
            .iter()
            .zip(colors)
            .map(|(series, color)| self.line.render(series.as_ref(), &shared.with_color(color)));

        let mut merged = grids.next().ok_or(ArgumentError::EmptyBatch)??;
        for grid in grids {
            merged.overlay(&grid?)?;
        }
        Ok(merged)
    }

    pub fn plot<S: AsRef<[Option<f64>]>>(
        &self,
        batch: &[S],
        opts: &RenderOptions,
    ) -> Result<String, ChartError> {
        Ok(self.render(batch, opts)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        constants::{HORIZONTAL, INCREASING_HI, INCREASING_LO},
        error::DimensionError,
    };

    fn opts(height: usize) -> RenderOptions {
        RenderOptions::builder().height(height).build().unwrap()
    }

    #[test]
    fn later_series_wins_shared_cells() {
        // both rise through column 2; the second also draws a flat run after
        let a = [Some(0.0), Some(1.0), None];
        let b = [Some(0.0), Some(1.0), Some(1.0)];
        let o = RenderOptions::builder()
            .height(2)
            .colors([1u8, 2])
            .build()
            .unwrap();
        let g = Composer::default().render(&[&a[..], &b[..]], &o).unwrap();
        assert_eq!(g.get(1, 2), Some("\x1b[38;5;2m╯\x1b[0m"));
        assert_eq!(g.get(0, 3), Some("\x1b[38;5;2m-\x1b[0m"));
    }

    #[test]
    fn earlier_ink_shows_through_gaps() {
        let a = vec![Some(0.0), Some(1.0), Some(2.0)];
        let b = vec![None, None, None];
        let c = vec![Some(2.0), None, Some(0.0)];
        let g = Composer::default().render(&[a, b, c], &opts(3));
        // an all-gap series cannot be scaled
        assert!(matches!(
            g,
            Err(ChartError::InvalidDimensions(DimensionError::TooFewPoints(0)))
        ));

        let a = vec![Some(0.0), Some(1.0), Some(2.0)];
        let c = vec![None, Some(2.0), Some(2.0)];
        let g = Composer::default().render(&[a, c], &opts(3)).unwrap();
        // series a's rising corners at column 2 survive
        assert_eq!(g.get(2, 2), Some(INCREASING_HI));
        assert_eq!(g.get(1, 2), Some(INCREASING_LO));
        // series c's flat run overwrites a's corner at column 3, row 0
        assert_eq!(g.get(0, 3), Some(HORIZONTAL));
    }

    #[test]
    fn shared_auto_height() {
        let small = vec![Some(0.0), Some(1.0)];
        let big = vec![Some(0.0), Some(12.0)];
        let g = Composer::default()
            .render(&[small, big], &RenderOptions::default())
            .unwrap();
        assert_eq!(g.rows(), 12);
    }

    #[test]
    fn validation() {
        let c = Composer::default();
        let none: [Vec<Option<f64>>; 0] = [];
        assert!(matches!(
            c.render(&none, &RenderOptions::default()),
            Err(ChartError::InvalidArgument(ArgumentError::EmptyBatch))
        ));
        let ragged = [vec![Some(1.0), Some(2.0), Some(3.0)], vec![Some(1.0), Some(2.0)]];
        match c.render(&ragged, &RenderOptions::default()) {
            Err(ChartError::InvalidArgument(ArgumentError::LengthMismatch { lengths })) => {
                assert_eq!(lengths, vec![3, 2]);
            }
            other => panic!("unexpected {other:?}"),
        }
        let pair = [vec![Some(1.0), Some(2.0)], vec![Some(2.0), Some(1.0)]];
        let o = RenderOptions::builder().colors(["red"]).build().unwrap();
        assert!(matches!(
            c.render(&pair, &o),
            Err(ChartError::InvalidArgument(
                ArgumentError::ColorCountMismatch { colors: 1, series: 2 }
            ))
        ));
        let bad = [vec![Some(1.0), Some(2.0)], vec![Some(f64::INFINITY), Some(1.0)]];
        assert!(matches!(
            c.render(&bad, &RenderOptions::default()),
            Err(ChartError::InvalidArgument(ArgumentError::NonFinite {
                series: 1,
                index: 0
            }))
        ));
    }

    #[test]
    fn single_colour_applies_to_all() {
        let pair = [vec![Some(1.0), Some(2.0)], vec![Some(2.0), Some(1.0)]];
        let o = RenderOptions::builder().height(2).color("red").build().unwrap();
        let out = Composer::default().plot(&pair, &o).unwrap();
        assert_eq!(out.matches("\x1b[38;5;9m").count(), 2);
    }
}
