//! Row capability traits.
//!
//! The engine never owns row data. The host hands in its live row
//! collection, which only needs two capabilities: key-addressable cell
//! access on each row, and positional insert/remove on the collection.
//! `Vec` of any `RowData` satisfies the collection contract out of the box.

use std::collections::BTreeMap;

use serde_json::Value;

/// A single row: an opaque mapping from column prop to value.
///
/// The engine reads and writes entries by prop key; it never enumerates or
/// reshapes a row beyond the props the schema names.
pub trait RowData {
    /// A row with no fields, used as the seed for default-row synthesis.
    fn empty() -> Self
    where
        Self: Sized;

    fn get(&self, prop: &str) -> Option<&Value>;

    fn set(&mut self, prop: &str, value: Value);
}

impl RowData for BTreeMap<String, Value> {
    fn empty() -> Self {
        BTreeMap::new()
    }

    fn get(&self, prop: &str) -> Option<&Value> {
        BTreeMap::get(self, prop)
    }

    fn set(&mut self, prop: &str, value: Value) {
        self.insert(prop.to_string(), value);
    }
}

impl RowData for serde_json::Map<String, Value> {
    fn empty() -> Self {
        serde_json::Map::new()
    }

    fn get(&self, prop: &str) -> Option<&Value> {
        serde_json::Map::get(self, prop)
    }

    fn set(&mut self, prop: &str, value: Value) {
        self.insert(prop.to_string(), value);
    }
}

/// The host's mutable row collection.
///
/// Required capabilities: index-addressable access plus positional insert
/// and remove. Every engine mutation is atomic at the granularity of one
/// insert/remove or one field assignment; there is no transactional
/// grouping across cells.
pub trait RowTable {
    type Row: RowData;

    fn row_count(&self) -> usize;

    fn row(&self, index: usize) -> Option<&Self::Row>;

    fn row_mut(&mut self, index: usize) -> Option<&mut Self::Row>;

    fn insert_row(&mut self, index: usize, row: Self::Row);

    fn remove_row(&mut self, index: usize) -> Option<Self::Row>;
}

impl<R: RowData> RowTable for Vec<R> {
    type Row = R;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&R> {
        self.as_slice().get(index)
    }

    fn row_mut(&mut self, index: usize) -> Option<&mut R> {
        self.as_mut_slice().get_mut(index)
    }

    fn insert_row(&mut self, index: usize, row: R) {
        if index <= self.len() {
            self.insert(index, row);
        }
    }

    fn remove_row(&mut self, index: usize) -> Option<R> {
        if index < self.len() {
            Some(self.remove(index))
        } else {
            None
        }
    }
}

/// Format a cell value for clipboard text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_btreemap_row_data() {
        let mut row: BTreeMap<String, Value> = RowData::empty();
        row.set("name", json!("ada"));
        assert_eq!(RowData::get(&row, "name"), Some(&json!("ada")));
        assert_eq!(RowData::get(&row, "missing"), None);
    }

    #[test]
    fn test_vec_row_table_splice() {
        let mut rows: Vec<BTreeMap<String, Value>> = vec![BTreeMap::new(), BTreeMap::new()];
        let mut extra: BTreeMap<String, Value> = RowData::empty();
        extra.set("id", json!(7));
        rows.insert_row(1, extra);
        assert_eq!(rows.row_count(), 3);
        assert_eq!(rows.row(1).and_then(|r| RowData::get(r, "id")), Some(&json!(7)));

        assert!(rows.remove_row(5).is_none());
        assert!(rows.remove_row(1).is_some());
        assert_eq!(rows.row_count(), 2);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("x")), "x");
        assert_eq!(display_value(&json!(3.5)), "3.5");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&Value::Null), "");
    }
}
