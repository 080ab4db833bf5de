//! Visual-geometry provider.
//!
//! The engine is decoupled from any rendering technology: the host injects
//! a `GridGeometry` that answers pure geometry queries. Nothing here is
//! cached; cell rects must be re-read per overlay update to stay correct
//! under scrolling and resizing.

use tablegrid_core::pos::GridPos;
use tablegrid_core::range::Range;
use tablegrid_core::rect::{Point, Rect, SelectionRect};

/// Geometry queries answered by the host's rendering layer.
pub trait GridGeometry {
    /// Resolve a pointer position to the covering cell, if any. Pointer
    /// events over headers, scrollbars, or empty space resolve to None and
    /// are ignored upstream.
    fn cell_at(&self, point: Point) -> Option<GridPos>;

    /// Pixel bounding box of one cell. None when the row or column no
    /// longer exists.
    fn cell_rect(&self, pos: GridPos) -> Option<Rect>;

    /// Pixel bounding box of the table surface.
    fn surface_rect(&self) -> Rect;

    fn row_count(&self) -> usize;

    fn col_count(&self) -> usize;
}

/// Compute the overlay rectangle for a cell range.
///
/// Returns a hidden rect when either corner cell cannot be resolved (the
/// selection has become non-displayable).
pub fn range_rect(geom: &dyn GridGeometry, range: Range) -> SelectionRect {
    let start = geom.cell_rect(range.top_left());
    let end = geom.cell_rect(range.bottom_right());
    match (start, end) {
        (Some(start), Some(end)) => SelectionRect::spanning(start, end, geom.surface_rect()),
        _ => SelectionRect::hidden(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::FixedGeometry;

    #[test]
    fn test_range_rect_spans_cells() {
        let geom = FixedGeometry::new(10, 4, 80.0, 24.0);
        let rect = range_rect(&geom, Range::new(1, 1, 2, 2));
        assert!(rect.visible);
        assert_eq!(rect.left, 80.0);
        assert_eq!(rect.top, 24.0);
        assert_eq!(rect.width, 160.0);
        assert_eq!(rect.height, 48.0);
    }

    #[test]
    fn test_range_rect_hidden_when_unresolvable() {
        let geom = FixedGeometry::new(2, 2, 80.0, 24.0);
        let rect = range_rect(&geom, Range::new(0, 0, 5, 0));
        assert!(!rect.visible);
    }
}
