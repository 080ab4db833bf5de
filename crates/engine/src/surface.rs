//! Per-instance interaction surface.
//!
//! `GridSurface` is the explicit state object a host creates when it
//! attaches selection behavior to a table, and drops when the table goes
//! away. It owns the schema cache, selection, fill drag, and menu state
//! for exactly one table instance; multiple tables never share state.
//!
//! All transitions happen synchronously inside the host's event handlers;
//! the host drains queued events after each dispatch.

use log::debug;

use tablegrid_core::pos::GridPos;
use tablegrid_core::rect::{Point, SelectionRect};

use crate::clipboard::ClipboardProvider;
use crate::columns::{ColumnNode, SchemaCache};
use crate::events::GridEvent;
use crate::fill::FillDrag;
use crate::geometry::GridGeometry;
use crate::menu::MenuState;
use crate::row::{RowData, RowTable};
use crate::selection::{SelectPhase, SelectionState};

/// A pointer event translated by the host from its native event system.
/// Coordinates are in the same pixel space the geometry provider answers in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    /// Right-click / context gesture.
    Context(Point),
    /// The table scrolled; cached overlay geometry is stale.
    Scroll,
}

/// A keyboard event, pre-decoded to the character plus modifier flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyInput {
    /// Ctrl+key (the common shortcut form in tests).
    pub fn ctrl(key: char) -> Self {
        Self { key, ctrl: true, meta: false, shift: false }
    }
}

/// Interaction state for one table instance.
#[derive(Default)]
pub struct GridSurface {
    pub(crate) schema: SchemaCache,
    pub(crate) selection: SelectionState,
    pub(crate) fill: FillDrag,
    pub(crate) menu: MenuState,
    pub(crate) events: Vec<GridEvent>,
}

impl GridSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the host's current column definitions. Re-derives the schema
    /// only when the definitions changed structurally; returns true when a
    /// re-derivation happened.
    ///
    /// A re-derivation invalidates every cell reference minted under the
    /// old schema, so any in-progress fill drag is cancelled and the
    /// selection resets.
    pub fn sync_columns(&mut self, defs: &[ColumnNode]) -> bool {
        if !self.schema.sync(defs) {
            return false;
        }
        self.cancel_fill_drag();
        if self.selection.phase() != SelectPhase::Idle {
            self.selection.clear();
            self.emit_selection();
        }
        true
    }

    pub fn schema(&self) -> &SchemaCache {
        &self.schema
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_rect(&self) -> SelectionRect {
        self.selection.rect()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Drain events queued since the last call.
    pub fn take_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop all transient interaction state (selection, drag, menu).
    pub fn reset(&mut self) {
        self.selection.clear();
        self.fill = FillDrag::None;
        self.menu.hide();
        self.events.clear();
    }

    /// Single entry point for pointer events on the table surface.
    pub fn handle_pointer<T: RowTable>(
        &mut self,
        event: PointerEvent,
        geom: &dyn GridGeometry,
        rows: &mut T,
    ) {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point, geom),
            PointerEvent::Move(point) => self.pointer_move(point, geom),
            PointerEvent::Up(_) => self.pointer_up(geom, rows),
            PointerEvent::Context(point) => self.open_context_menu(point, geom),
            PointerEvent::Scroll => self.scrolled(),
        }
    }

    /// Keyboard shortcuts: Ctrl/Cmd+C copies, Ctrl/Cmd+V pastes. No-ops
    /// without a selection; Shift-modified combinations pass through.
    pub fn handle_key<T: RowTable>(
        &mut self,
        key: KeyInput,
        rows: &mut T,
        clipboard: &mut dyn ClipboardProvider,
    ) {
        if self.selection.is_empty() {
            return;
        }
        if !(key.ctrl || key.meta) || key.shift {
            return;
        }
        match key.key.to_ascii_lowercase() {
            'c' => self.copy_to_clipboard(rows, clipboard),
            'v' => self.paste_from_clipboard(rows, clipboard),
            _ => {}
        }
    }

    /// Write a value the host's inline editor committed, notifying through
    /// the event queue. Out-of-range rows are ignored.
    pub fn commit_cell_edit<T: RowTable>(
        &mut self,
        row: usize,
        prop: &str,
        value: serde_json::Value,
        rows: &mut T,
    ) {
        match rows.row_mut(row) {
            Some(r) => {
                r.set(prop, value.clone());
                self.emit_cell_changed(row, prop, value);
            }
            None => debug!("edit commit for row {row} out of range, ignored"),
        }
    }

    fn pointer_down(&mut self, point: Point, geom: &dyn GridGeometry) {
        if self.menu.visible {
            self.hide_menu();
        }

        // The fill handle sits on top of the selection's bottom-right
        // corner; it wins over starting a new selection.
        if self.try_start_fill_drag(point, geom) {
            return;
        }

        let Some(pos) = geom.cell_at(point) else {
            debug!("pointer down outside any cell, ignored");
            return;
        };
        self.selection.begin(pos, &self.schema, geom);
        self.emit_selection();
    }

    fn pointer_move(&mut self, point: Point, geom: &dyn GridGeometry) {
        if self.menu.visible {
            self.hide_menu();
        }

        if self.fill.is_dragging() {
            if let Some(pos) = geom.cell_at(point) {
                self.continue_fill_drag(pos);
            }
            return;
        }

        if self.selection.phase() == SelectPhase::Selecting {
            let Some(pos) = geom.cell_at(point) else {
                return;
            };
            self.selection.drag_to(pos, &self.schema, geom);
            self.emit_selection();
        }
    }

    fn pointer_up<T: RowTable>(&mut self, geom: &dyn GridGeometry, rows: &mut T) {
        if self.fill.is_dragging() {
            self.end_fill_drag(rows, geom);
            return;
        }

        if self.selection.phase() == SelectPhase::Selecting {
            let single = self.selection.range().map(|r| r.is_single()).unwrap_or(false);
            self.selection.commit();
            if single {
                // Click without drag: signal edit intent for the data cell.
                if let Some(cell) = self.selection.cells().first() {
                    self.events.push(GridEvent::EditIntent { key: cell.edit_key() });
                }
            }
        }
    }

    fn open_context_menu(&mut self, point: Point, geom: &dyn GridGeometry) {
        let Some(pos) = geom.cell_at(point) else {
            return;
        };
        // Right-click outside the selection replaces it with that cell;
        // inside, the selection is preserved.
        if !self.selection.contains(pos) {
            self.selection.set_single(pos, &self.schema, geom);
            self.emit_selection();
        }
        self.menu.show_at(point, pos);
        self.events.push(GridEvent::MenuChanged { menu: self.menu });
    }

    fn scrolled(&mut self) {
        self.cancel_fill_drag();
        if self.selection.phase() != SelectPhase::Idle {
            self.selection.clear();
            self.emit_selection();
        }
    }

    pub(crate) fn hide_menu(&mut self) {
        self.menu.hide();
        self.events.push(GridEvent::MenuChanged { menu: self.menu });
    }

    pub(crate) fn emit_selection(&mut self) {
        self.events.push(GridEvent::SelectionChanged { rect: self.selection.rect() });
    }

    pub(crate) fn emit_cell_changed(&mut self, row: usize, prop: &str, value: serde_json::Value) {
        self.events.push(GridEvent::CellChanged { row, prop: prop.to_string(), value });
    }

    /// Context-menu target row, if the menu is open.
    pub(crate) fn context_cell(&self) -> Option<GridPos> {
        self.menu.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{numbered_rows, sample_schema_defs, FixedGeometry};
    use serde_json::json;
    use tablegrid_core::column::ColumnKind;

    fn committed_selection(
        geom: &FixedGeometry,
        rows: &mut Vec<std::collections::BTreeMap<String, serde_json::Value>>,
    ) -> GridSurface {
        let mut surface = GridSurface::new();
        surface.sync_columns(&sample_schema_defs());
        surface.handle_pointer(PointerEvent::Down(geom.cell_center(0, 1)), geom, rows);
        surface.handle_pointer(PointerEvent::Move(geom.cell_center(1, 2)), geom, rows);
        surface.handle_pointer(PointerEvent::Up(geom.cell_center(1, 2)), geom, rows);
        surface.take_events();
        surface
    }

    #[test]
    fn test_structural_resync_resets_selection() {
        let geom = FixedGeometry::new(5, 4, 80.0, 24.0);
        let mut rows = numbered_rows(5);
        let mut surface = committed_selection(&geom, &mut rows);
        assert!(!surface.selection().is_empty());

        let mut defs = sample_schema_defs();
        defs[1] = crate::columns::ColumnNode::leaf("secret", ColumnKind::Data);
        assert!(surface.sync_columns(&defs));

        // No cell reference minted under the old schema survives.
        assert!(surface.selection().is_empty());
        let events = surface.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GridEvent::SelectionChanged { rect } if !rect.visible)));
    }

    #[test]
    fn test_identical_resync_keeps_selection() {
        let geom = FixedGeometry::new(5, 4, 80.0, 24.0);
        let mut rows = numbered_rows(5);
        let mut surface = committed_selection(&geom, &mut rows);

        assert!(!surface.sync_columns(&sample_schema_defs()));
        assert_eq!(surface.selection().cells().len(), 4);
        assert!(surface.take_events().is_empty());
    }

    #[test]
    fn test_commit_cell_edit_writes_and_notifies() {
        let mut surface = GridSurface::new();
        surface.sync_columns(&sample_schema_defs());
        let mut rows = numbered_rows(3);

        surface.commit_cell_edit(1, "name", json!("edited"), &mut rows);

        assert_eq!(RowData::get(&rows[1], "name"), Some(&json!("edited")));
        let events = surface.take_events();
        assert_eq!(
            events,
            vec![GridEvent::CellChanged { row: 1, prop: "name".into(), value: json!("edited") }]
        );
    }

    #[test]
    fn test_commit_cell_edit_ignores_missing_row() {
        let mut surface = GridSurface::new();
        surface.sync_columns(&sample_schema_defs());
        let mut rows = numbered_rows(2);
        let before = rows.clone();

        surface.commit_cell_edit(7, "name", json!("edited"), &mut rows);

        assert_eq!(rows, before);
        assert!(surface.take_events().is_empty());
    }
}
