//! Event types for host notifications.
//!
//! The surface queues events during dispatch; the host drains them after
//! each input event and reacts (redraw overlay, open inline editor, mark
//! data dirty). The collector exists for tests that assert on ordering.

use serde_json::Value;
use tablegrid_core::range::Range;
use tablegrid_core::rect::SelectionRect;

use crate::menu::MenuState;

/// Notifications emitted by the grid surface.
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent {
    /// A single click landed on a data cell; the host may open its inline
    /// editor. Key is `"{row}-{prop}"`.
    EditIntent { key: String },

    /// A cell value was written (fill apply, paste, or broadcast edit).
    CellChanged { row: usize, prop: String, value: Value },

    /// The selection (and its overlay rectangle) changed.
    SelectionChanged { rect: SelectionRect },

    /// The fill-drag preview target changed (None = drag ended/cancelled).
    FillPreviewChanged { target: Option<Range> },

    /// The context menu was shown or hidden.
    MenuChanged { menu: MenuState },

    /// Rows were inserted or removed; new row count attached.
    RowsChanged { row_count: usize },
}

/// Simple event collector for testing.
#[derive(Default)]
pub struct EventCollector {
    events: Vec<GridEvent>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = GridEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[GridEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Filter to cell-change notifications.
    pub fn cell_changes(&self) -> Vec<(usize, &str, &Value)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GridEvent::CellChanged { row, prop, value } => Some((*row, prop.as_str(), value)),
                _ => None,
            })
            .collect()
    }

    /// Filter to edit-intent keys.
    pub fn edit_intents(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GridEvent::EditIntent { key } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recent selection rectangle, if any was emitted.
    pub fn last_selection_rect(&self) -> Option<SelectionRect> {
        self.events
            .iter()
            .rev()
            .find_map(|e| match e {
                GridEvent::SelectionChanged { rect } => Some(*rect),
                _ => None,
            })
    }
}
