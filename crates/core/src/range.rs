//! Rectangular cell ranges.

use serde::{Deserialize, Serialize};

use crate::pos::GridPos;

/// A rectangular range of cells, inclusive on both ends.
///
/// Always normalized: `start_row <= end_row` and `start_col <= end_col`,
/// so the range is independent of which corner the user pressed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Range {
    /// Create a new range, automatically normalizing so start <= end.
    pub fn new(r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        Self {
            start_row: r1.min(r2),
            start_col: c1.min(c2),
            end_row: r1.max(r2),
            end_col: c1.max(c2),
        }
    }

    /// Rectangular closure of two corner positions.
    pub fn from_corners(a: GridPos, b: GridPos) -> Self {
        Self::new(a.row, a.col, b.row, b.col)
    }

    /// Create a single-cell range.
    pub fn single(pos: GridPos) -> Self {
        Self {
            start_row: pos.row,
            start_col: pos.col,
            end_row: pos.row,
            end_col: pos.col,
        }
    }

    pub fn top_left(&self) -> GridPos {
        GridPos::new(self.start_row, self.start_col)
    }

    pub fn bottom_right(&self) -> GridPos {
        GridPos::new(self.end_row, self.end_col)
    }

    /// Check if this range contains a cell.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row >= self.start_row
            && pos.row <= self.end_row
            && pos.col >= self.start_col
            && pos.col <= self.end_col
    }

    /// Number of cells in this range.
    pub fn cell_count(&self) -> usize {
        (self.end_row - self.start_row + 1) * (self.end_col - self.start_col + 1)
    }

    pub fn row_span(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    pub fn col_span(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// Smallest range covering both `self` and `other`.
    pub fn union(&self, other: &Range) -> Range {
        Range {
            start_row: self.start_row.min(other.start_row),
            start_col: self.start_col.min(other.start_col),
            end_row: self.end_row.max(other.end_row),
            end_col: self.end_col.max(other.end_col),
        }
    }

    /// Iterate over all cells in this range (row-major order).
    pub fn cells(&self) -> impl Iterator<Item = GridPos> {
        let start_row = self.start_row;
        let end_row = self.end_row;
        let start_col = self.start_col;
        let end_col = self.end_col;

        (start_row..=end_row)
            .flat_map(move |r| (start_col..=end_col).map(move |c| GridPos::new(r, c)))
    }

    /// Check if this is a single cell.
    pub fn is_single(&self) -> bool {
        self.start_row == self.end_row && self.start_col == self.end_col
    }
}
