//! Grid coordinates.
//!
//! A `GridPos` addresses one cell on the tabular surface by positional
//! indices. Columns count every rendered column, including structural
//! (index / checkbox) columns; filtering to data columns happens at the
//! schema layer.

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid (0-based row and column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}
