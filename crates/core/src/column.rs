//! Column kinds and addressable cell references.

use serde::{Deserialize, Serialize};

/// Semantic tag for a table column.
///
/// `Index` and `Selection` are structural columns (row number, row-select
/// checkbox); they are never addressable as data cells. Unrecognized type
/// tags are preserved verbatim in `Other` and behave like `Data` everywhere
/// except default-value synthesis, where the raw tag stays available.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Data,
    Boolean,
    Index,
    Selection,
    Other(String),
}

impl ColumnKind {
    /// Parse a host-supplied type tag. Absent or generic tags map to `Data`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some("") | Some("data") => ColumnKind::Data,
            Some("boolean") => ColumnKind::Boolean,
            Some("index") => ColumnKind::Index,
            Some("selection") => ColumnKind::Selection,
            Some(other) => ColumnKind::Other(other.to_string()),
        }
    }

    /// Structural columns carry no cell data.
    pub fn is_structural(&self) -> bool {
        matches!(self, ColumnKind::Index | ColumnKind::Selection)
    }
}

impl Default for ColumnKind {
    fn default() -> Self {
        ColumnKind::Data
    }
}

/// One addressable data cell: grid coordinates plus the column's value key.
///
/// Invariant: never constructed for a structural column or a column with no
/// prop. The schema layer enforces this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
    pub prop: String,
    pub kind: ColumnKind,
}

impl CellRef {
    /// Identity key in `"{row}-{prop}"` form, as handed to the inline
    /// editor collaborator.
    pub fn edit_key(&self) -> String {
        format!("{}-{}", self.row, self.prop)
    }
}
