//! Column schema cache.
//!
//! The host table component owns an ordered column-definition tree (one
//! level of grouping). The engine flattens it into an addressable column
//! list and re-derives only when the definitions change structurally, so a
//! pointer-move storm never pays for re-derivation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tablegrid_core::column::{CellRef, ColumnKind};

use crate::row::RowData;

/// A node in the host's column-definition tree.
///
/// A node with children contributes each child to the flattened list,
/// never itself. A leaf contributes itself even when it has no prop; such
/// columns are filtered out by consumers that need an addressable key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNode {
    pub prop: Option<String>,
    pub kind: ColumnKind,
    pub children: Vec<ColumnNode>,
}

impl ColumnNode {
    pub fn leaf(prop: impl Into<String>, kind: ColumnKind) -> Self {
        Self { prop: Some(prop.into()), kind, children: Vec::new() }
    }

    pub fn structural(kind: ColumnKind) -> Self {
        Self { prop: None, kind, children: Vec::new() }
    }

    pub fn group(children: Vec<ColumnNode>) -> Self {
        Self { prop: None, kind: ColumnKind::Data, children }
    }
}

/// One flattened, position-addressable column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub prop: Option<String>,
    pub kind: ColumnKind,
}

impl Column {
    /// Data columns have a value key and are not structural.
    pub fn is_data(&self) -> bool {
        !self.kind.is_structural() && self.prop.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Flatten one level of grouped column definitions.
pub fn flatten(defs: &[ColumnNode]) -> Vec<Column> {
    let mut columns = Vec::new();
    for def in defs {
        if !def.children.is_empty() {
            for child in &def.children {
                columns.push(Column { prop: child.prop.clone(), kind: child.kind.clone() });
            }
        } else {
            columns.push(Column { prop: def.prop.clone(), kind: def.kind.clone() });
        }
    }
    columns
}

/// Per-instance cache of the flattened column list.
///
/// Re-derivation fully replaces the cache; partial updates are not
/// supported. The change check is structural equality over prop/kind at
/// every position, including one level of children.
#[derive(Clone, Debug, Default)]
pub struct SchemaCache {
    snapshot: Vec<ColumnNode>,
    columns: Vec<Column>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the column list if `defs` differs structurally from the
    /// last snapshot. Returns true when the cache was replaced.
    pub fn sync(&mut self, defs: &[ColumnNode]) -> bool {
        if !self.columns.is_empty() && defs == self.snapshot.as_slice() {
            return false;
        }
        self.snapshot = defs.to_vec();
        self.columns = flatten(defs);
        true
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, col: usize) -> Option<&Column> {
        self.columns.get(col)
    }

    /// Resolve a grid position to an addressable data cell.
    ///
    /// Returns None for structural columns, prop-less columns, and columns
    /// past the end of the cache (stale references are skipped, never
    /// written through).
    pub fn cell_ref(&self, row: usize, col: usize) -> Option<CellRef> {
        let column = self.columns.get(col)?;
        if !column.is_data() {
            return None;
        }
        Some(CellRef {
            row,
            col,
            prop: column.prop.clone().unwrap_or_default(),
            kind: column.kind.clone(),
        })
    }

    /// Ordered data columns starting at `col`, used for positional paste
    /// mapping. Structural and prop-less columns are skipped.
    pub fn data_props_from(&self, col: usize) -> Vec<&str> {
        self.columns
            .iter()
            .skip(col)
            .filter(|c| c.is_data())
            .filter_map(|c| c.prop.as_deref())
            .collect()
    }

    /// Synthesize a default row: one entry per data column, booleans start
    /// false, everything else null. The optional hook runs once per field
    /// so the caller can apply its own initialization policy.
    pub fn default_row<R: RowData>(
        &self,
        mut init_field: Option<&mut dyn FnMut(&mut R, &str)>,
    ) -> R {
        let mut row = R::empty();
        for column in &self.columns {
            if !column.is_data() {
                continue;
            }
            let prop = column.prop.as_deref().unwrap_or_default();
            let default = match column.kind {
                ColumnKind::Boolean => Value::Bool(false),
                _ => Value::Null,
            };
            row.set(prop, default);
            if let Some(hook) = init_field.as_deref_mut() {
                hook(&mut row, prop);
            }
        }
        row
    }
}
