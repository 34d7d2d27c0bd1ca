//! In-memory table model and loaders
//!
//! A [`Table`] is a header row plus data rows of string cells. Columns are
//! addressed by position only.

pub mod loader;

pub use loader::{CsvLoader, TableLoader};

/// Header plus data rows, held entirely in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from string literals
    #[cfg(test)]
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns named by the header row
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Header for a column, or a `Column_{n}` placeholder past the header's end
    pub fn column_name(&self, index: usize) -> String {
        self.headers
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Column_{}", index + 1))
    }
}

/// 1-based row number as seen in a spreadsheet, counting the header as row 1
pub fn display_row_number(data_index: usize) -> usize {
    data_index + 2
}
