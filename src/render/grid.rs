//! Row-major grid of string tokens.
//!
//! A cell holds a blank, a glyph (possibly wrapped in colour escapes) or a
//! whole formatted label.  Labels occupy one cell however wide they print,
//! so columns to the right of a label only line up approximately on screen.

use std::{borrow::Cow, fmt};

use crate::core::{constants::BLANK_SPACE, error::DimensionError};

pub type Cell = Cow<'static, str>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// `rows × cols`, every cell blank.
    #[must_use]
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![Cow::Borrowed(BLANK_SPACE); rows * cols],
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len().checked_div(self.cols).unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        (col < self.cols)
            .then(|| self.cells.get(row * self.cols + col))
            .flatten()
            .map(|c| &**c)
    }

    /// Out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, token: impl Into<Cell>) {
        if col < self.cols {
            if let Some(c) = self.cells.get_mut(row * self.cols + col) {
                *c = token.into();
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none_or(|c| c == BLANK_SPACE)
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &str> {
        self.cells
            .chunks(self.cols.max(1))
            .nth(row)
            .into_iter()
            .flatten()
            .map(|c| &**c)
    }

    /// Paint `top` over `self`: every non-blank cell of `top` wins, blanks
    /// never erase.
    pub fn overlay(&mut self, top: &Self) -> Result<(), DimensionError> {
        if (self.rows(), self.cols) != (top.rows(), top.cols) {
            return Err(DimensionError::GridMismatch {
                want: (self.rows(), self.cols),
                got: (top.rows(), top.cols),
            });
        }
        for (dst, src) in self.cells.iter_mut().zip(&top.cells) {
            if src != BLANK_SPACE {
                dst.clone_from(src);
            }
        }
        Ok(())
    }
}

/// Cells joined per row, rows joined with `\n`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for cell in self.row(r) {
                f.write_str(cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_grid_shape() {
        let g = Grid::blank(3, 4);
        assert_eq!((g.rows(), g.cols()), (3, 4));
        assert_eq!(g.to_string(), "    \n    \n    ");
        assert!(g.is_blank(2, 3));
    }

    #[test]
    fn set_and_get() {
        let mut g = Grid::blank(2, 2);
        g.set(1, 0, "╭");
        g.set(0, 1, String::from("  4.00 "));
        g.set(5, 5, "x");
        g.set(0, 2, "x");
        assert_eq!(g.get(1, 0), Some("╭"));
        assert_eq!(g.get(0, 2), None);
        assert_eq!(g.to_string(), "   4.00 \n╭ ");
    }

    #[test]
    fn overlay_later_ink_wins_blanks_do_not_erase() {
        let mut a = Grid::blank(1, 3);
        a.set(0, 0, "a");
        a.set(0, 1, "a");
        let mut b = Grid::blank(1, 3);
        b.set(0, 1, "b");
        b.set(0, 2, "b");
        a.overlay(&b).unwrap();
        assert_eq!(a.to_string(), "abb");
    }

    #[test]
    fn overlay_rejects_other_shapes() {
        let mut a = Grid::blank(2, 3);
        let err = a.overlay(&Grid::blank(3, 3)).unwrap_err();
        assert_eq!(
            err,
            DimensionError::GridMismatch {
                want: (2, 3),
                got: (3, 3)
            }
        );
    }
}
