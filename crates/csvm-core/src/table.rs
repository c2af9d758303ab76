//! Core table types for delimited data

use serde::{Deserialize, Serialize};

/// Name of the synthetic provenance column added to every merged row
pub const SOURCE_COLUMN: &str = "__source_file__";

/// A parsed table from a single input document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Column definitions, in header order
    pub columns: Vec<Column>,
    /// Row data, in document order
    pub rows: Vec<Row>,
    /// Display name of the originating document
    pub source_name: String,
}

impl Table {
    /// Create a new empty table
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            source_name: source_name.into(),
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a column by name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a cell by row index and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.find_column(column)?;
        self.rows.get(row).and_then(|r| r.get(col.index))
    }
}

/// A column definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header line
    pub name: String,
    /// Column index (0-based) within its table
    pub index: usize,
}

impl Column {
    /// Create a new column
    pub fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }
}

/// A row of data
///
/// Cells are positionally aligned with the owning table's columns. Values are
/// kept verbatim as strings; a missing cell is an empty string, never a
/// typed null marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    /// Cell values for each column
    pub cells: Vec<String>,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// The merged union of several tagged tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedTable {
    /// Column definitions: first-seen union of all source columns,
    /// with [`SOURCE_COLUMN`] always last
    pub columns: Vec<Column>,
    /// All rows, in input document order then within-document order
    pub rows: Vec<Row>,
    /// Document names that contributed rows, in merge order
    pub sources: Vec<String>,
}

impl MergedTable {
    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a column by name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a cell by row index and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.find_column(column)?;
        self.rows.get(row).and_then(|r| r.get(col.index))
    }

    /// One-line shape summary for display
    pub fn summary(&self) -> String {
        format!("Rows: {} • Columns: {}", self.row_count(), self.column_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MergedTable {
        MergedTable {
            columns: vec![
                Column::new("id".to_string(), 0),
                Column::new(SOURCE_COLUMN.to_string(), 1),
            ],
            rows: vec![
                Row::new(vec!["1".to_string(), "a.csv".to_string()]),
                Row::new(vec!["2".to_string(), "a.csv".to_string()]),
            ],
            sources: vec!["a.csv".to_string()],
        }
    }

    #[test]
    fn test_cell_lookup_by_column_name() {
        let table = sample();
        assert_eq!(table.cell(0, "id"), Some("1"));
        assert_eq!(table.cell(1, SOURCE_COLUMN), Some("a.csv"));
        assert_eq!(table.cell(0, "missing"), None);
        assert_eq!(table.cell(5, "id"), None);
    }

    #[test]
    fn test_summary_shape() {
        assert_eq!(sample().summary(), "Rows: 2 • Columns: 2");
    }

    #[test]
    fn test_row_get_out_of_bounds() {
        let row = Row::new(vec!["x".to_string()]);
        assert_eq!(row.get(0), Some("x"));
        assert_eq!(row.get(1), None);
    }
}
