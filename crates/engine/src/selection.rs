//! Rectangular selection state machine.
//!
//! Phases: Idle → Selecting (pointer held) → Committed (pointer released).
//! The selected cell set is the rectangular closure of anchor and focus,
//! filtered to data columns, in row-major order. The pixel rectangle is
//! recomputed from live geometry on every change; when it becomes
//! non-resolvable the whole selection clears back to Idle.

use tablegrid_core::column::CellRef;
use tablegrid_core::pos::GridPos;
use tablegrid_core::range::Range;
use tablegrid_core::rect::SelectionRect;

use crate::columns::SchemaCache;
use crate::geometry::{range_rect, GridGeometry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectPhase {
    #[default]
    Idle,
    Selecting,
    Committed,
}

/// Drag orientation recorded at selection start.
///
/// The closure algorithm is orientation-agnostic; this flag is reserved
/// for asymmetric drag semantics and currently has no observable effect
/// on the selected cell set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    phase: SelectPhase,
    anchor: Option<GridPos>,
    focus: Option<GridPos>,
    orientation: Orientation,
    cells: Vec<CellRef>,
    rect: SelectionRect,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectPhase {
        self.phase
    }

    pub fn cells(&self) -> &[CellRef] {
        &self.cells
    }

    pub fn rect(&self) -> SelectionRect {
        self.rect
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Closure of the two defining corners, if a selection exists.
    pub fn range(&self) -> Option<Range> {
        Some(Range::from_corners(self.anchor?, self.focus?))
    }

    /// Whether a data cell at this position is part of the selection.
    pub fn contains(&self, pos: GridPos) -> bool {
        self.cells.iter().any(|c| c.row == pos.row && c.col == pos.col)
    }

    /// Minimum row and minimum column among selected cells (paste origin).
    pub fn min_pos(&self) -> Option<GridPos> {
        let row = self.cells.iter().map(|c| c.row).min()?;
        let col = self.cells.iter().map(|c| c.col).min()?;
        Some(GridPos::new(row, col))
    }

    /// Pointer-down on a resolvable cell: record the anchor and enter
    /// Selecting.
    pub fn begin(&mut self, pos: GridPos, schema: &SchemaCache, geom: &dyn GridGeometry) {
        self.phase = SelectPhase::Selecting;
        self.anchor = Some(pos);
        self.focus = Some(pos);
        self.orientation = Orientation::Vertical;
        self.recompute(schema, geom);
    }

    /// Pointer-move during a drag: extend the closure to the hovered cell.
    pub fn drag_to(&mut self, pos: GridPos, schema: &SchemaCache, geom: &dyn GridGeometry) {
        if self.phase != SelectPhase::Selecting {
            return;
        }
        self.focus = Some(pos);
        self.recompute(schema, geom);
    }

    /// Pointer-up: freeze the current cell set. Releasing over an empty
    /// set (the drag never covered a data column) clears instead.
    pub fn commit(&mut self) {
        if self.phase != SelectPhase::Selecting {
            return;
        }
        if self.cells.is_empty() {
            self.clear();
        } else {
            self.phase = SelectPhase::Committed;
        }
    }

    /// Replace the selection with a committed single cell (click or
    /// right-click outside the current selection).
    pub fn set_single(&mut self, pos: GridPos, schema: &SchemaCache, geom: &dyn GridGeometry) {
        self.anchor = Some(pos);
        self.focus = Some(pos);
        self.phase = SelectPhase::Committed;
        self.recompute(schema, geom);
        if self.cells.is_empty() {
            self.clear();
        }
    }

    /// Extend a committed selection to cover `range` (fill apply).
    pub fn set_range(&mut self, range: Range, schema: &SchemaCache, geom: &dyn GridGeometry) {
        self.anchor = Some(range.top_left());
        self.focus = Some(range.bottom_right());
        self.phase = SelectPhase::Committed;
        self.recompute(schema, geom);
        if self.cells.is_empty() {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn recompute(&mut self, schema: &SchemaCache, geom: &dyn GridGeometry) {
        let Some(range) = self.range() else {
            self.clear();
            return;
        };

        self.cells = range
            .cells()
            .filter_map(|pos| schema.cell_ref(pos.row, pos.col))
            .collect();

        if self.cells.is_empty() {
            // The closure covers only structural columns so far. The anchor
            // and phase survive: the drag may still grow into data columns.
            self.rect = SelectionRect::hidden();
            return;
        }

        self.rect = range_rect(geom, range);
        if !self.rect.visible {
            // A corner cell no longer exists; the selection is stale.
            self.clear();
        }
    }
}
