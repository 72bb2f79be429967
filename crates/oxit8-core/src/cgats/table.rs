//! A single CGATS table: sheet type, properties, data format and rows

use super::error::CgatsError;
use super::writer::format_number;

/// How a property value is spelled in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `KEYWORD "text"`
    Quoted,
    /// `KEYWORD 42`
    Bare,
}

/// A property value as stored in a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Value text without quotes
    pub value: String,
    /// Whether the value is written quoted
    pub kind: ValueKind,
}

/// One table of a CGATS sheet
///
/// Properties keep their insertion order; re-setting a keyword replaces the
/// value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    sheet_type: String,
    properties: Vec<(String, Property)>,
    data_format: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given sheet type
    pub fn new(sheet_type: impl Into<String>) -> Self {
        Self {
            sheet_type: sheet_type.into(),
            ..Self::default()
        }
    }

    /// Get the sheet type tag
    pub fn sheet_type(&self) -> &str {
        &self.sheet_type
    }

    /// Set the sheet type tag
    pub fn set_sheet_type(&mut self, sheet_type: impl Into<String>) {
        self.sheet_type = sheet_type.into();
    }

    /// Get a property value by keyword
    pub fn property(&self, keyword: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, p)| p.value.as_str())
    }

    /// Set a quoted string property
    pub fn set_property(&mut self, keyword: impl Into<String>, value: impl Into<String>) {
        self.insert(keyword.into(), value.into(), ValueKind::Quoted);
    }

    /// Set a numeric property, written bare
    pub fn set_property_number(&mut self, keyword: impl Into<String>, value: f64) {
        self.insert(keyword.into(), format_number(value), ValueKind::Bare);
    }

    pub(crate) fn insert(&mut self, keyword: String, value: String, kind: ValueKind) {
        let property = Property { value, kind };
        match self.properties.iter_mut().find(|(k, _)| *k == keyword) {
            Some(slot) => slot.1 = property,
            None => self.properties.push((keyword, property)),
        }
    }

    /// Iterate over properties in insertion order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.properties.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Column names
    pub fn data_format(&self) -> &[String] {
        &self.data_format
    }

    /// Name column `col`, growing the format as needed
    pub fn set_data_format(&mut self, col: usize, name: impl Into<String>) {
        if self.data_format.len() <= col {
            self.data_format.resize(col + 1, String::new());
        }
        self.data_format[col] = name.into();
    }

    /// Index of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.data_format.iter().position(|f| f == name)
    }

    pub(crate) fn push_format(&mut self, name: String) {
        self.data_format.push(name);
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All data rows as raw cell text
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub(crate) fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
    }

    /// Raw text of a cell
    pub fn cell(&self, row: usize, col: usize) -> Result<&str, CgatsError> {
        let cells = self.rows.get(row).ok_or(CgatsError::RowOutOfRange {
            row,
            count: self.rows.len(),
        })?;
        cells
            .get(col)
            .map(String::as_str)
            .ok_or(CgatsError::ColumnOutOfRange {
                row,
                col,
                count: cells.len(),
            })
    }

    /// Cell parsed as a floating-point number
    pub fn numeric_cell(&self, row: usize, col: usize) -> Result<f64, CgatsError> {
        let text = self.cell(row, col)?;
        text.trim()
            .parse::<f64>()
            .map_err(|_| CgatsError::InvalidNumber {
                row,
                col,
                text: text.to_string(),
            })
    }

    /// Set a cell's raw text, growing the table as needed
    ///
    /// New cells are filled with `0`.
    pub fn set_cell(&mut self, row: usize, col: usize, text: impl Into<String>) {
        let width = self.data_format.len().max(col + 1);
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, || vec!["0".to_string(); width]);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(width, "0".to_string());
        }
        cells[col] = text.into();
    }

    /// Set a cell to a number
    pub fn set_numeric_cell(&mut self, row: usize, col: usize, value: f64) {
        self.set_cell(row, col, format_number(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_replace_keeps_order() {
        let mut table = Table::new("CTI3");
        table.set_property("ORIGINATOR", "a");
        table.set_property("REFERENCE", "b");
        table.set_property("ORIGINATOR", "c");

        let keys: Vec<_> = table.properties().map(|(k, _)| k).collect();
        assert_eq!(keys, ["ORIGINATOR", "REFERENCE"]);
        assert_eq!(table.property("ORIGINATOR"), Some("c"));
        assert_eq!(table.property("MISSING"), None);
    }

    #[test]
    fn test_set_sheet_type() {
        let mut table = Table::default();
        assert_eq!(table.sheet_type(), "");
        table.set_sheet_type("CTI1");
        table.set_sheet_type("CCMX");
        assert_eq!(table.sheet_type(), "CCMX");
    }

    #[test]
    fn test_numeric_property_is_bare() {
        let mut table = Table::new("CTI3");
        table.set_property_number("NUMBER_OF_SETS", 12.0);
        let (_, prop) = table.properties().next().unwrap();
        assert_eq!(prop.value, "12");
        assert_eq!(prop.kind, ValueKind::Bare);
    }

    #[test]
    fn test_set_numeric_cell_grows() {
        let mut table = Table::new("CCMX");
        table.set_data_format(0, "XYZ_X");
        table.set_data_format(1, "XYZ_Y");
        table.set_data_format(2, "XYZ_Z");
        table.set_numeric_cell(2, 1, 0.25);

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[0], ["0", "0", "0"]);
        assert_eq!(table.numeric_cell(2, 1).unwrap(), 0.25);
        assert_eq!(table.column_index("XYZ_Z"), Some(2));
    }

    #[test]
    fn test_cell_errors() {
        let mut table = Table::new("CTI1");
        table.set_cell(0, 0, "A1");

        assert_eq!(
            table.cell(1, 0),
            Err(CgatsError::RowOutOfRange { row: 1, count: 1 })
        );
        assert_eq!(
            table.cell(0, 4),
            Err(CgatsError::ColumnOutOfRange {
                row: 0,
                col: 4,
                count: 1
            })
        );
        assert!(matches!(
            table.numeric_cell(0, 0),
            Err(CgatsError::InvalidNumber { .. })
        ));
    }
}
