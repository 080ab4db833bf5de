//! Clipboard codec and injected clipboard capability.
//!
//! The wire format is the only serialized form this crate owns: rows
//! separated by `\n`, fields by `\t` on emit. Parsing accepts tab-separated
//! (spreadsheet apps), comma-separated (CSV), or single-column input, in
//! that priority order. No quoting or escaping of embedded delimiters is
//! performed.

use std::collections::BTreeMap;

use log::warn;
use serde_json::Value;

use tablegrid_core::column::CellRef;
use tablegrid_core::pos::GridPos;

use crate::row::{display_value, RowData, RowTable};
use crate::surface::GridSurface;

/// Clipboard access failure. Never fatal: callers log and abort the
/// operation with no partial mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard capability exists in this environment.
    Unavailable,
    /// The platform refused access.
    PermissionDenied,
    /// Any other transport failure.
    Io(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard unavailable"),
            ClipboardError::PermissionDenied => write!(f, "clipboard permission denied"),
            ClipboardError::Io(msg) => write!(f, "clipboard error: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Injected clipboard capability. Either call may fail independently of
/// all other state.
pub trait ClipboardProvider {
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory provider, useful for tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.text.clone().ok_or(ClipboardError::Unavailable)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Serialize selected cells to delimited text: ascending row then column,
/// fields tab-joined, rows newline-joined.
pub fn serialize_cells<T: RowTable>(cells: &[CellRef], rows: &T) -> String {
    let mut grouped: BTreeMap<usize, BTreeMap<usize, String>> = BTreeMap::new();
    for cell in cells {
        let value = rows
            .row(cell.row)
            .and_then(|r| r.get(&cell.prop))
            .map(display_value)
            .unwrap_or_default();
        grouped.entry(cell.row).or_default().insert(cell.col, value);
    }

    grouped
        .values()
        .map(|cols| cols.values().cloned().collect::<Vec<_>>().join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split pasted text into a 2-D value grid. Delimiter priority: tab, then
/// comma, then treat the input as one newline-separated column. The
/// delimiter is chosen from the raw input, before trimming, so a trailing
/// tab still selects tab mode.
pub fn parse_grid(text: &str) -> Vec<Vec<String>> {
    let has_tab = text.contains('\t');
    let has_comma = text.contains(',');
    let text = text.trim();
    let split = |sep: char| {
        text.lines()
            .map(|line| line.split(sep).map(str::to_string).collect())
            .collect()
    };

    if has_tab {
        split('\t')
    } else if has_comma {
        split(',')
    } else {
        text.lines().map(|line| vec![line.to_string()]).collect()
    }
}

impl GridSurface {
    /// Copy the current selection to the clipboard. No-op when the
    /// selection is empty; write failures are logged, never raised.
    pub fn copy_to_clipboard<T: RowTable>(
        &mut self,
        rows: &T,
        clipboard: &mut dyn ClipboardProvider,
    ) {
        if self.selection.is_empty() {
            return;
        }
        let text = serialize_cells(self.selection.cells(), rows);
        if let Err(err) = clipboard.write_text(&text) {
            warn!("copy failed: {err}");
        }
    }

    /// Paste clipboard text into the table, anchored at the selection's
    /// minimum row/column (or the context-menu cell when nothing is
    /// selected). The whole read completes before any cell is written;
    /// out-of-range offsets are skipped per cell.
    pub fn paste_from_clipboard<T: RowTable>(
        &mut self,
        rows: &mut T,
        clipboard: &mut dyn ClipboardProvider,
    ) {
        let anchor = match self.selection.min_pos().or_else(|| self.context_cell()) {
            Some(anchor) => anchor,
            None => return,
        };

        let text = match clipboard.read_text() {
            Ok(text) => text,
            Err(err) => {
                warn!("paste failed: {err}");
                return;
            }
        };
        if text.trim().is_empty() {
            warn!("clipboard is empty, nothing to paste");
            return;
        }

        self.apply_grid(&parse_grid(&text), anchor, rows);
    }

    /// Write a parsed value grid into the rows, mapping columns
    /// positionally through the data columns starting at the anchor.
    fn apply_grid<T: RowTable>(&mut self, grid: &[Vec<String>], anchor: GridPos, rows: &mut T) {
        let props: Vec<String> = self
            .schema
            .data_props_from(anchor.col)
            .into_iter()
            .map(str::to_string)
            .collect();

        for (row_offset, values) in grid.iter().enumerate() {
            let target_row = anchor.row + row_offset;
            if target_row >= rows.row_count() {
                // No row auto-creation on paste.
                continue;
            }
            for (col_offset, value) in values.iter().enumerate() {
                let Some(prop) = props.get(col_offset) else {
                    continue;
                };
                if let Some(row) = rows.row_mut(target_row) {
                    row.set(prop, Value::String(value.clone()));
                    self.emit_cell_changed(target_row, prop, Value::String(value.clone()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{numbered_rows, sample_schema_defs, FixedGeometry};
    use crate::surface::{GridSurface, KeyInput, PointerEvent};
    use serde_json::json;

    #[test]
    fn test_parse_grid_delimiter_priority() {
        assert_eq!(
            parse_grid("a\tb\nc\td"),
            vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string(), "d".to_string()]]
        );
        assert_eq!(
            parse_grid("a,b\nc,d"),
            vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string(), "d".to_string()]]
        );
        assert_eq!(
            parse_grid("a\nb"),
            vec![vec!["a".to_string()], vec!["b".to_string()]]
        );
        // Tabs win even when commas are present.
        assert_eq!(
            parse_grid("a,x\tb\n"),
            vec![vec!["a,x".to_string(), "b".to_string()]]
        );
        // A delimiter that trimming would strip still selects the mode.
        assert_eq!(parse_grid("a\t"), vec![vec!["a".to_string()]]);
        assert_eq!(parse_grid("a,b\t"), vec![vec!["a,b".to_string()]]);
    }

    #[test]
    fn test_serialize_row_major() {
        let mut rows = numbered_rows(2);
        rows[0].set("name", json!(1));
        rows[0].set("qty", json!(2));
        rows[1].set("name", json!(3));
        rows[1].set("qty", json!(4));

        let mut surface = GridSurface::new();
        surface.sync_columns(&sample_schema_defs());
        let cells: Vec<_> = (0..2)
            .flat_map(|r| (1..=2).map(move |c| (r, c)))
            .filter_map(|(r, c)| surface.schema().cell_ref(r, c))
            .collect();

        assert_eq!(serialize_cells(&cells, &rows), "1\t2\n3\t4");
    }

    #[test]
    fn test_copy_paste_round_trip() {
        let geom = FixedGeometry::new(5, 4, 80.0, 24.0);
        let mut surface = GridSurface::new();
        surface.sync_columns(&sample_schema_defs());
        let mut rows = numbered_rows(5);
        let mut clipboard = MemoryClipboard::new();

        // Select rows 0-1 x cols 1-2 and copy.
        surface.handle_pointer(PointerEvent::Down(geom.cell_center(0, 1)), &geom, &mut rows);
        surface.handle_pointer(PointerEvent::Move(geom.cell_center(1, 2)), &geom, &mut rows);
        surface.handle_pointer(PointerEvent::Up(geom.cell_center(1, 2)), &geom, &mut rows);
        surface.handle_key(KeyInput::ctrl('c'), &mut rows, &mut clipboard);
        assert_eq!(clipboard.text(), Some("name0\t0\nname1\t1"));

        // Re-anchor at row 3 and paste.
        surface.handle_pointer(PointerEvent::Down(geom.cell_center(3, 1)), &geom, &mut rows);
        surface.handle_pointer(PointerEvent::Up(geom.cell_center(3, 1)), &geom, &mut rows);
        surface.handle_key(KeyInput::ctrl('v'), &mut rows, &mut clipboard);

        assert_eq!(rows[3].get("name"), Some(&json!("name0")));
        assert_eq!(rows[3].get("qty"), Some(&json!("0")));
        assert_eq!(rows[4].get("name"), Some(&json!("name1")));
        assert_eq!(rows[4].get("qty"), Some(&json!("1")));
    }

    #[test]
    fn test_paste_skips_out_of_range() {
        let geom = FixedGeometry::new(2, 4, 80.0, 24.0);
        let mut surface = GridSurface::new();
        surface.sync_columns(&sample_schema_defs());
        let mut rows = numbered_rows(2);
        let mut clipboard = MemoryClipboard::with_text("a\tb\tc\nd\te\tf\ng\th\ti");

        surface.handle_pointer(PointerEvent::Down(geom.cell_center(1, 2)), &geom, &mut rows);
        surface.handle_pointer(PointerEvent::Up(geom.cell_center(1, 2)), &geom, &mut rows);
        surface.handle_key(KeyInput::ctrl('v'), &mut rows, &mut clipboard);

        // Origin (1,2): only row 1 exists, and only cols "qty","active"
        // remain from col 2 on; the third field and later rows vanish.
        assert_eq!(rows[1].get("qty"), Some(&json!("a")));
        assert_eq!(rows[1].get("active"), Some(&json!("b")));
        assert_eq!(rows[0].get("qty"), Some(&json!(0)));
    }

    #[test]
    fn test_paste_read_failure_mutates_nothing() {
        struct FailingClipboard;
        impl ClipboardProvider for FailingClipboard {
            fn read_text(&mut self) -> Result<String, ClipboardError> {
                Err(ClipboardError::PermissionDenied)
            }
            fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
                Err(ClipboardError::PermissionDenied)
            }
        }

        let geom = FixedGeometry::new(3, 4, 80.0, 24.0);
        let mut surface = GridSurface::new();
        surface.sync_columns(&sample_schema_defs());
        let mut rows = numbered_rows(3);
        let before = rows.clone();

        surface.handle_pointer(PointerEvent::Down(geom.cell_center(0, 1)), &geom, &mut rows);
        surface.handle_pointer(PointerEvent::Up(geom.cell_center(0, 1)), &geom, &mut rows);
        surface.handle_key(KeyInput::ctrl('v'), &mut rows, &mut FailingClipboard);

        assert_eq!(rows, before);
    }

    #[test]
    fn test_copy_requires_selection() {
        let mut surface = GridSurface::new();
        surface.sync_columns(&sample_schema_defs());
        let rows = numbered_rows(2);
        let mut clipboard = MemoryClipboard::new();
        surface.copy_to_clipboard(&rows, &mut clipboard);
        assert_eq!(clipboard.text(), None);
    }
}
