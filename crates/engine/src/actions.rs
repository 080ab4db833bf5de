//! Row-level actions reachable from the context menu.

use rustc_hash::FxHashSet;

use crate::clipboard::ClipboardProvider;
use crate::events::GridEvent;
use crate::menu::MenuAction;
use crate::row::RowTable;
use crate::surface::GridSurface;

/// Optional per-field initializer applied to each data prop of a freshly
/// created row, letting the host seed ids or defaults beyond the schema's.
pub type RowInit<'a, R> = Option<&'a mut dyn FnMut(&mut R, &str)>;

impl GridSurface {
    /// Insert an empty row above the context-menu row.
    pub fn insert_row_above<T: RowTable>(&mut self, rows: &mut T, init: RowInit<'_, T::Row>) {
        if let Some(cell) = self.context_cell() {
            self.insert_at(cell.row, rows, init);
        }
    }

    /// Insert an empty row below the context-menu row.
    pub fn insert_row_below<T: RowTable>(&mut self, rows: &mut T, init: RowInit<'_, T::Row>) {
        if let Some(cell) = self.context_cell() {
            self.insert_at(cell.row + 1, rows, init);
        }
    }

    fn insert_at<T: RowTable>(&mut self, index: usize, rows: &mut T, init: RowInit<'_, T::Row>) {
        let row = self.schema.default_row(init);
        rows.insert_row(index, row);
        self.events.push(GridEvent::RowsChanged { row_count: rows.row_count() });
    }

    /// Delete the context-menu row.
    pub fn delete_current_row<T: RowTable>(&mut self, rows: &mut T) {
        let Some(cell) = self.context_cell() else {
            return;
        };
        if rows.remove_row(cell.row).is_some() {
            self.events.push(GridEvent::RowsChanged { row_count: rows.row_count() });
        }
    }

    /// Delete every row that has at least one selected cell. Indices are
    /// removed highest-first so earlier removals never shift later ones.
    pub fn delete_selected_rows<T: RowTable>(&mut self, rows: &mut T) {
        let distinct: FxHashSet<usize> = self.selection.cells().iter().map(|c| c.row).collect();
        if distinct.is_empty() {
            return;
        }
        let mut indices: Vec<usize> = distinct.into_iter().collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for index in indices {
            rows.remove_row(index);
        }
        self.events.push(GridEvent::RowsChanged { row_count: rows.row_count() });
    }

    /// Run a context-menu action, then dismiss the menu and drop the
    /// selection so the next gesture starts clean.
    pub fn dispatch_menu_action<T: RowTable>(
        &mut self,
        action: MenuAction,
        rows: &mut T,
        clipboard: &mut dyn ClipboardProvider,
        init: RowInit<'_, T::Row>,
    ) {
        match action {
            MenuAction::InsertRowAbove => self.insert_row_above(rows, init),
            MenuAction::InsertRowBelow => self.insert_row_below(rows, init),
            MenuAction::DeleteCurrentRow => self.delete_current_row(rows),
            MenuAction::DeleteSelectedRows => self.delete_selected_rows(rows),
            MenuAction::CopyToClipboard => self.copy_to_clipboard(rows, clipboard),
            MenuAction::PasteFromClipboard => self.paste_from_clipboard(rows, clipboard),
        }
        self.hide_menu();
        self.selection.clear();
        self.emit_selection();
    }
}
