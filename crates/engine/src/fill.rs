//! Fill-handle drag engine.
//!
//! The fill handle is the small affordance at the selection rectangle's
//! bottom-right corner. Dragging it replicates the selected values into
//! the newly covered cells, cycling through the source cells round-robin
//! when the target region is larger than the source.

use log::debug;
use rustc_hash::FxHashSet;
use serde_json::Value;

use tablegrid_core::column::CellRef;
use tablegrid_core::pos::GridPos;
use tablegrid_core::range::Range;
use tablegrid_core::rect::Point;

use crate::events::GridEvent;
use crate::geometry::GridGeometry;
use crate::row::{RowData, RowTable};
use crate::surface::GridSurface;

/// Half-size of the square hot zone around the handle corner, in logical
/// pixels.
pub const FILL_HANDLE_HIT_SIZE: f32 = 8.0;

/// Fill drag axis (locked after the first significant movement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillAxis {
    /// Filling vertically; the region stays locked to the source
    /// selection's column span.
    Row,
    /// Filling horizontally; the row span follows the pointer, with no
    /// counterpart to the vertical column-span lock.
    Col,
}

/// Fill handle drag state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FillDrag {
    #[default]
    None,
    Dragging {
        /// Snapshot of the selection's cells at drag start (row-major).
        source: Vec<CellRef>,
        /// Closure of the source selection.
        source_range: Range,
        /// Bottom-right cell of the selection when the drag started.
        anchor: GridPos,
        /// Current hover cell during drag.
        current: GridPos,
        /// Axis lock (None until the movement threshold is crossed).
        axis: Option<FillAxis>,
    },
}

impl FillDrag {
    pub fn is_dragging(&self) -> bool {
        matches!(self, FillDrag::Dragging { .. })
    }
}

impl GridSurface {
    /// Begin a fill drag if the pointer landed in the handle hot zone of a
    /// committed selection. Returns true when the drag started.
    pub(crate) fn try_start_fill_drag(&mut self, point: Point, geom: &dyn GridGeometry) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let rect = self.selection.rect();
        if !rect.visible {
            return false;
        }

        // SelectionRect is surface-relative; pointer coordinates are in
        // the geometry provider's space.
        let surface = geom.surface_rect();
        let corner = rect.corner();
        let cx = surface.left + corner.x;
        let cy = surface.top + corner.y;
        if (point.x - cx).abs() > FILL_HANDLE_HIT_SIZE || (point.y - cy).abs() > FILL_HANDLE_HIT_SIZE {
            return false;
        }

        let Some(range) = self.selection.range() else {
            return false;
        };
        let anchor = range.bottom_right();
        self.fill = FillDrag::Dragging {
            source: self.selection.cells().to_vec(),
            source_range: range,
            anchor,
            current: anchor,
            axis: None,
        };
        true
    }

    /// Continue the drag over a new cell: lock the axis on the first
    /// significant movement, then extend the target region.
    pub(crate) fn continue_fill_drag(&mut self, pos: GridPos) {
        let target = match &mut self.fill {
            FillDrag::Dragging { source_range, anchor, current, axis, .. } => {
                if pos == *current {
                    return;
                }
                if axis.is_none() {
                    let horiz = pos.col.abs_diff(anchor.col);
                    let vert = pos.row.abs_diff(anchor.row);
                    if horiz > vert {
                        *axis = Some(FillAxis::Col);
                    } else if vert > 0 {
                        *axis = Some(FillAxis::Row);
                    } else {
                        // Movement too small to pick a direction yet.
                        return;
                    }
                }

                let mut next = pos;
                if *axis == Some(FillAxis::Row) {
                    // Vertical fill stays inside the source column span.
                    next.col = next.col.clamp(source_range.start_col, source_range.end_col);
                }
                *current = next;
                source_range.union(&Range::from_corners(*anchor, *current))
            }
            FillDrag::None => return,
        };
        self.events.push(GridEvent::FillPreviewChanged { target: Some(target) });
    }

    /// The prospective fill region while a drag is active (source cells
    /// included; use `is_fill_preview_cell` to exclude them).
    pub fn fill_target_range(&self) -> Option<Range> {
        if let FillDrag::Dragging { source_range, anchor, current, axis, .. } = &self.fill {
            if current == anchor || axis.is_none() {
                return None;
            }
            Some(source_range.union(&Range::from_corners(*anchor, *current)))
        } else {
            None
        }
    }

    /// Whether a cell should render as part of the fill preview.
    pub fn is_fill_preview_cell(&self, pos: GridPos) -> bool {
        let FillDrag::Dragging { source_range, .. } = &self.fill else {
            return false;
        };
        if source_range.contains(pos) {
            return false;
        }
        self.fill_target_range().is_some_and(|t| t.contains(pos))
    }

    /// Release the fill handle: replicate source values into every target
    /// cell not covered by the source selection, then extend the
    /// selection over the filled region.
    pub(crate) fn end_fill_drag<T: RowTable>(&mut self, rows: &mut T, geom: &dyn GridGeometry) {
        let target = self.fill_target_range();
        let FillDrag::Dragging { source, source_range, .. } = std::mem::take(&mut self.fill) else {
            return;
        };
        self.events.push(GridEvent::FillPreviewChanged { target: None });

        let Some(target) = target else {
            // Released without crossing any new cell.
            return;
        };
        if source.is_empty() {
            return;
        }

        let occupied: FxHashSet<(usize, usize)> =
            source.iter().map(|c| (c.row, c.col)).collect();
        let targets: Vec<CellRef> = target
            .cells()
            .filter(|pos| !occupied.contains(&(pos.row, pos.col)))
            .filter(|pos| !source_range.contains(*pos))
            .filter_map(|pos| self.schema.cell_ref(pos.row, pos.col))
            .collect();
        if targets.is_empty() {
            return;
        }

        for (idx, cell) in targets.iter().enumerate() {
            let src = &source[idx % source.len()];
            let value = rows
                .row(src.row)
                .and_then(|r| r.get(&src.prop))
                .cloned()
                .unwrap_or(Value::Null);
            match rows.row_mut(cell.row) {
                Some(row) => {
                    row.set(&cell.prop, value.clone());
                    self.emit_cell_changed(cell.row, &cell.prop, value);
                }
                None => debug!("fill target row {} out of range, skipped", cell.row),
            }
        }

        self.selection.set_range(target, &self.schema, geom);
        self.emit_selection();
    }

    /// Abandon an in-progress fill drag without writing anything.
    pub(crate) fn cancel_fill_drag(&mut self) {
        if self.fill.is_dragging() {
            self.fill = FillDrag::None;
            self.events.push(GridEvent::FillPreviewChanged { target: None });
        }
    }
}
