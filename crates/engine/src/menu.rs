//! Context-menu model.
//!
//! Typed descriptors for the right-click menu plus the ephemeral position
//! state. This module is the single source of truth for menu structure and
//! action ids; rendering the menu is the host's job.

use serde::{Deserialize, Serialize};
use tablegrid_core::pos::GridPos;
use tablegrid_core::rect::Point;

/// Typed action enum for context-menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    InsertRowAbove,
    InsertRowBelow,
    DeleteCurrentRow,
    DeleteSelectedRows,
    CopyToClipboard,
    PasteFromClipboard,
}

/// Menu entry descriptor, the single source of truth for menu structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Item { label: &'static str, action: MenuAction },
    Separator,
}

/// The cell context menu, in display order.
pub fn context_menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Item { label: "Insert Above", action: MenuAction::InsertRowAbove },
        MenuEntry::Item { label: "Insert Below", action: MenuAction::InsertRowBelow },
        MenuEntry::Separator,
        MenuEntry::Item { label: "Delete Row", action: MenuAction::DeleteCurrentRow },
        MenuEntry::Item { label: "Delete Selected Rows", action: MenuAction::DeleteSelectedRows },
        MenuEntry::Separator,
        MenuEntry::Item { label: "Copy", action: MenuAction::CopyToClipboard },
        MenuEntry::Item { label: "Paste", action: MenuAction::PasteFromClipboard },
    ]
}

/// Where the context menu is shown and which cell it targets.
///
/// Ephemeral UI state; never persisted across interactions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuState {
    pub visible: bool,
    pub x: f32,
    pub y: f32,
    pub cell: Option<GridPos>,
}

impl MenuState {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn show_at(&mut self, point: Point, cell: GridPos) {
        self.visible = true;
        self.x = point.x;
        self.y = point.y;
        self.cell = Some(cell);
    }

    pub fn hide(&mut self) {
        *self = Self::hidden();
    }

    /// Row the menu was opened on, if it is (or was) showing.
    pub fn context_row(&self) -> Option<usize> {
        self.cell.map(|c| c.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_all_actions() {
        let entries = context_menu_entries();
        let actions: Vec<_> = entries
            .iter()
            .filter_map(|e| match e {
                MenuEntry::Item { action, .. } => Some(*action),
                MenuEntry::Separator => None,
            })
            .collect();
        assert_eq!(actions.len(), 6);
        assert!(actions.contains(&MenuAction::DeleteSelectedRows));
        assert!(actions.contains(&MenuAction::PasteFromClipboard));
    }

    #[test]
    fn test_show_hide() {
        let mut menu = MenuState::hidden();
        menu.show_at(Point::new(12.0, 30.0), GridPos::new(2, 1));
        assert!(menu.visible);
        assert_eq!(menu.context_row(), Some(2));
        menu.hide();
        assert_eq!(menu, MenuState::hidden());
    }
}
