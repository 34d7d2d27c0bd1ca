//! Table loaders
//!
//! Loading is kept behind [`TableLoader`] so the matcher never cares where
//! rows came from. [`CsvLoader`] reads delimited text through the `csv` crate.

use super::Table;
use crate::error::SearchError;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Source of a [`Table`]
pub trait TableLoader {
    fn load(&self, path: &Path) -> Result<Table, SearchError>;
}

/// Delimited-text loader
#[derive(Debug, Clone)]
pub struct CsvLoader {
    /// Delimiter byte (default: comma)
    delimiter: u8,
    /// Whether to trim whitespace around cells
    trim: bool,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

impl CsvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse already-read bytes into a table
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Table, SearchError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let content = String::from_utf8(bytes.to_vec())?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(SearchError::ParseError("file has no header row".to_string()));
        }

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                SearchError::ParseError(format!("row {}: {}", index + 2, e))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!("Parsed {} columns and {} data rows", headers.len(), rows.len());
        Ok(Table::new(headers, rows))
    }

    fn read_source(path: &Path) -> Result<Vec<u8>, SearchError> {
        let not_found = |e: std::io::Error| SearchError::FileNotFound {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        if path == Path::new(STDIN_PATH) {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer).map_err(not_found)?;
            return Ok(buffer);
        }

        std::fs::read(path).map_err(not_found)
    }
}

impl TableLoader for CsvLoader {
    fn load(&self, path: &Path) -> Result<Table, SearchError> {
        info!("Loading table from {}", path.display());
        let bytes = Self::read_source(path)?;
        self.parse_bytes(&bytes)
    }
}
