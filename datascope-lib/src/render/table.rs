//! Schema-less table model
//!
//! Derives a row/column grid from an arbitrary dataset without prior
//! schema knowledge. The shape is discovered from the first element only;
//! later elements with missing keys render empty cells and extra keys are
//! silently dropped.

use crate::model::Record;
use crate::model::Value;

/// One displayed column: the raw record key and its header text.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    key: String,
    header: String,
}

impl Column {
    /// Returns the record key this column reads from.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display header text.
    pub fn header(&self) -> &str {
        &self.header
    }
}

/// A derived row/column grid with pre-formatted cells.
///
/// Derived, never stored: build a fresh model from the dataset whenever
/// it changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Derives a table model from a dataset.
    ///
    /// Columns come from the first element's keys, in document order,
    /// minus any key hidden by the shallow-nesting rule (see
    /// [`column_visible`]). A first element that is not an object yields
    /// no columns at all. Every element becomes a row regardless of its
    /// shape; cells for missing or unreadable values are empty strings.
    pub fn derive(dataset: &[Value]) -> Self {
        let columns = dataset.first().map(derive_columns).unwrap_or_default();
        let rows = dataset
            .iter()
            .map(|element| {
                columns
                    .iter()
                    .map(|column| match element {
                        Value::Object(record) => {
                            record.get(column.key()).map(format_cell).unwrap_or_default()
                        }
                        _ => String::new(),
                    })
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    /// Returns the derived columns, in first-record key order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the formatted cell rows, one per dataset element.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

fn derive_columns(first: &Value) -> Vec<Column> {
    let Value::Object(record) = first else {
        return Vec::new();
    };
    record
        .iter()
        .filter(|(_, value)| column_visible(value))
        .map(|(key, _)| Column {
            key: key.to_string(),
            header: header_text(key),
        })
        .collect()
}

/// The shallow-nesting rule: a scalar-valued key is always visible, and a
/// composite-valued key (object or array) is visible only while everything
/// one level inside it is scalar. Deeper nesting hides the column.
/// `Null` counts as a scalar at every level.
pub fn column_visible(value: &Value) -> bool {
    match value {
        Value::Object(record) => record.iter().all(|(_, nested)| !nested.is_composite()),
        Value::Array(items) => items.iter().all(|nested| !nested.is_composite()),
        _ => true,
    }
}

/// Header text for a key: first character upper-cased, rest unchanged.
/// Not a general title-case transform; `user_name` becomes `User_name`.
pub fn header_text(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats one cell value.
///
/// Null renders as the empty string, scalars as their plain string form.
/// A composite renders as a comma-joined list of `key: value` pairs over
/// only its own scalar-valued entries, recursing no further; arrays use
/// their indices as keys.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Object(record) => join_scalar_pairs(record),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter(|(_, nested)| !nested.is_composite())
            .map(|(index, nested)| format!("{}: {}", index, format_cell(nested)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn join_scalar_pairs(record: &Record) -> String {
    record
        .iter()
        .filter(|(_, nested)| !nested.is_composite())
        .map(|(key, nested)| format!("{}: {}", key, format_cell(nested)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(json: &str) -> Vec<Value> {
        match serde_json::from_str(json).unwrap() {
            Value::Array(items) => items,
            _ => panic!("test dataset must be an array"),
        }
    }

    #[test]
    fn test_columns_from_first_record_in_order() {
        let data = dataset(r#"[{"id": 1, "name": "a"}, {"name": "b", "id": 2}]"#);
        let model = TableModel::derive(&data);
        let keys: Vec<_> = model.columns().iter().map(Column::key).collect();
        assert_eq!(keys, vec!["id", "name"]);
    }

    #[test]
    fn test_shallow_nested_object_kept_and_formatted() {
        let data = dataset(r#"[{"a": 1, "b": {"x": 1, "y": 2}}, {"a": 2, "b": {"x": 3, "y": 4}}]"#);
        let model = TableModel::derive(&data);
        let keys: Vec<_> = model.columns().iter().map(Column::key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(model.rows()[0][1], "x: 1, y: 2");
        assert_eq!(model.rows()[1][1], "x: 3, y: 4");
    }

    #[test]
    fn test_deeply_nested_column_hidden() {
        let data = dataset(r#"[{"id": 1, "address": {"city": "Rome", "geo": {"lat": 0}}}]"#);
        let model = TableModel::derive(&data);
        let keys: Vec<_> = model.columns().iter().map(Column::key).collect();
        assert_eq!(keys, vec!["id"]);
    }

    #[test]
    fn test_nested_null_is_tolerated() {
        let data = dataset(r#"[{"contact": {"phone": null, "mail": "a@b"}}]"#);
        let model = TableModel::derive(&data);
        assert_eq!(model.columns().len(), 1);
        assert_eq!(model.rows()[0][0], "phone: , mail: a@b");
    }

    #[test]
    fn test_array_of_scalars_formats_with_indices() {
        let data = dataset(r#"[{"tags": ["red", "blue"]}]"#);
        let model = TableModel::derive(&data);
        assert_eq!(model.columns().len(), 1);
        assert_eq!(model.rows()[0][0], "0: red, 1: blue");
    }

    #[test]
    fn test_array_of_objects_hides_column() {
        let data = dataset(r#"[{"id": 1, "children": [{"x": 1}]}]"#);
        let model = TableModel::derive(&data);
        let keys: Vec<_> = model.columns().iter().map(Column::key).collect();
        assert_eq!(keys, vec!["id"]);
    }

    #[test]
    fn test_missing_keys_render_empty_extra_keys_dropped() {
        let data = dataset(r#"[{"id": 1, "name": "a"}, {"id": 2, "surprise": true}]"#);
        let model = TableModel::derive(&data);
        assert_eq!(model.rows()[1], vec!["2".to_string(), String::new()]);
    }

    #[test]
    fn test_scalar_first_element_yields_no_columns() {
        let data = dataset("[1, 2, 3]");
        let model = TableModel::derive(&data);
        assert!(model.columns().is_empty());
        assert_eq!(model.rows().len(), 3);
    }

    #[test]
    fn test_header_casing() {
        assert_eq!(header_text("name"), "Name");
        assert_eq!(header_text("user_name"), "User_name");
        assert_eq!(header_text("ID"), "ID");
        assert_eq!(header_text(""), "");
    }

    #[test]
    fn test_cell_formatting_of_scalars() {
        assert_eq!(format_cell(&Value::Null), "");
        assert_eq!(format_cell(&Value::Bool(true)), "true");
        assert_eq!(format_cell(&Value::Int(-3)), "-3");
        assert_eq!(format_cell(&Value::Float(2.5)), "2.5");
        assert_eq!(format_cell(&Value::Float(3.0)), "3");
        assert_eq!(format_cell(&Value::String("x".into())), "x");
    }
}
