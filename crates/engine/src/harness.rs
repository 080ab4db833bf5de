//! Shared fixtures for unit tests.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use tablegrid_core::column::ColumnKind;
use tablegrid_core::pos::GridPos;
use tablegrid_core::rect::{Point, Rect};

use crate::columns::ColumnNode;
use crate::geometry::GridGeometry;
use crate::row::RowData;

/// Uniform grid geometry anchored at the origin.
pub struct FixedGeometry {
    rows: usize,
    cols: usize,
    cell_w: f32,
    cell_h: f32,
}

impl FixedGeometry {
    pub fn new(rows: usize, cols: usize, cell_w: f32, cell_h: f32) -> Self {
        Self { rows, cols, cell_w, cell_h }
    }

    /// Pointer position at the center of a cell.
    pub fn cell_center(&self, row: usize, col: usize) -> Point {
        Point::new(
            col as f32 * self.cell_w + self.cell_w / 2.0,
            row as f32 * self.cell_h + self.cell_h / 2.0,
        )
    }
}

impl GridGeometry for FixedGeometry {
    fn cell_at(&self, point: Point) -> Option<GridPos> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.cell_w) as usize;
        let row = (point.y / self.cell_h) as usize;
        (row < self.rows && col < self.cols).then(|| GridPos::new(row, col))
    }

    fn cell_rect(&self, pos: GridPos) -> Option<Rect> {
        (pos.row < self.rows && pos.col < self.cols).then(|| {
            Rect::new(
                pos.col as f32 * self.cell_w,
                pos.row as f32 * self.cell_h,
                self.cell_w,
                self.cell_h,
            )
        })
    }

    fn surface_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.cols as f32 * self.cell_w, self.rows as f32 * self.cell_h)
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn col_count(&self) -> usize {
        self.cols
    }
}

/// Index column plus three data columns: "name", "qty", "active" (boolean).
pub fn sample_schema_defs() -> Vec<ColumnNode> {
    vec![
        ColumnNode::structural(ColumnKind::Index),
        ColumnNode::leaf("name", ColumnKind::Data),
        ColumnNode::leaf("qty", ColumnKind::Data),
        ColumnNode::leaf("active", ColumnKind::Boolean),
    ]
}

/// Rows where row `i` has name "name{i}" and qty `i`.
pub fn numbered_rows(n: usize) -> Vec<BTreeMap<String, Value>> {
    (0..n)
        .map(|i| {
            let mut row = BTreeMap::new();
            row.set("name", json!(format!("name{i}")));
            row.set("qty", json!(i));
            row.set("active", json!(false));
            row
        })
        .collect()
}
