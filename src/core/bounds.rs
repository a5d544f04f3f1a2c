//! Value ranges + terminal size plumbing.

use terminal_size::{Width, terminal_size};

/// Exact `(min, max)` over the present values, `None` when there are none.
#[must_use]
pub fn value_range(series: &[Option<f64>]) -> Option<(f64, f64)> {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in series.iter().flatten() {
        low = low.min(*v);
        high = high.max(*v);
    }
    (low <= high).then_some((low, high))
}

/// Combined range over a whole batch.
#[must_use]
pub fn batch_range<S: AsRef<[Option<f64>]>>(batch: &[S]) -> Option<(f64, f64)> {
    batch
        .iter()
        .filter_map(|s| value_range(s.as_ref()))
        .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

/// How many samples fit in `columns` once the gutter is paid for.
///
/// The label is one grid cell but `label_width` characters on screen, and
/// the axis mark is two characters.
#[inline]
#[must_use]
pub fn samples_that_fit(columns: usize, offset: usize, label_width: usize) -> usize {
    columns.saturating_sub(offset + label_width + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_skips_gaps() {
        assert_eq!(
            value_range(&[None, Some(3.0), Some(-1.0), None]),
            Some((-1.0, 3.0))
        );
        assert_eq!(value_range(&[None, None]), None);
        assert_eq!(value_range(&[]), None);
    }

    #[test]
    fn batch_range_spans_all_series() {
        let batch = [vec![Some(1.0), Some(2.0)], vec![None, Some(9.0)], vec![None, None]];
        assert_eq!(batch_range(&batch), Some((1.0, 9.0)));
    }

    #[test]
    fn fit_accounts_for_gutter() {
        assert_eq!(samples_that_fit(80, 0, 9), 69);
        assert_eq!(samples_that_fit(10, 5, 9), 0);
    }
}
