//! Ordered report rows and the column-fixed table view consumed by renderers.
//!
//! # Design
//! - A row is an ordered list of `(key, value)` pairs; insertion order is the
//!   column order.
//! - The first row fixes the columns. Later rows are looked up by key and a
//!   missing key renders as a blank cell.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One record of a report: column key to display value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow {
    cells: Vec<(String, String)>,
}

impl ReportRow {
    /// Empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or overwrite a cell; overwriting keeps the original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(cell) = self.cells.iter_mut().find(|(existing, _)| *existing == key) {
            cell.1 = value;
        } else {
            self.cells.push((key, value));
        }
    }

    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Keys in column order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(key, _)| key.as_str())
    }

    /// Number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for ReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (key, value) in &self.cells {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Rows projected onto the column set of the first row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// Project `rows` onto the keys of the first row.
    #[must_use]
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let Some(first) = rows.first() else {
            return Self::default();
        };
        let columns: Vec<String> = first.keys().map(str::to_string).collect();
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| row.get(column).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    /// Column keys.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cell values, one vector per row, aligned with [`Self::columns`].
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Whether there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Printed header for a column key: underscores become spaces, upper-cased.
#[must_use]
pub fn header_label(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_in_place() {
        let row = ReportRow::new()
            .with("Room", "A")
            .with("Status", "PRESENT")
            .with("Room", "B");
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["Room", "Status"]);
        assert_eq!(row.get("Room"), Some("B"));
    }

    #[test]
    fn table_uses_first_row_columns_and_blanks_missing_cells() {
        let rows = vec![
            ReportRow::new().with("Name", "Ana").with("Status", "Good"),
            ReportRow::new().with("Name", "Ben").with("Extra", "ignored"),
        ];
        let table = ReportTable::from_rows(&rows);
        assert_eq!(table.columns(), ["Name", "Status"]);
        assert_eq!(table.rows()[1], vec!["Ben".to_string(), String::new()]);
    }

    #[test]
    fn header_label_formats_keys() {
        assert_eq!(header_label("Subject_Load"), "SUBJECT LOAD");
    }

    #[test]
    fn row_serialises_as_ordered_object() {
        let row = ReportRow::new().with("b", "1").with("a", "2");
        let text = serde_json::to_string(&row).expect("serialise");
        assert_eq!(text, r#"{"b":"1","a":"2"}"#);
    }
}
