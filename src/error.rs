//! Error types and handling for the column search

use crate::search::normalize::normalize;
use thiserror::Error;

/// Failures that stop a search before an outcome can be produced.
///
/// "No match" is an outcome, not an error: see
/// [`crate::search::SearchOutcome::NoMatch`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("File '{path}' not found: {reason}")]
    FileNotFound { path: String, reason: String },

    #[error("Error reading CSV file: {0}")]
    ParseError(String),

    #[error("CSV file doesn't have at least {required} columns (found {columns})")]
    StructuralError { columns: usize, required: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to render report: {0}")]
    RenderError(String),
}

impl SearchError {
    /// Stable error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::FileNotFound { .. } => "file_not_found",
            SearchError::ParseError(_) => "parse_error",
            SearchError::StructuralError { .. } => "structural_error",
            SearchError::InvalidConfig(_) => "invalid_config",
            SearchError::RenderError(_) => "render_error",
        }
    }

    /// Process exit code used when the caller does not ask for lenient exits
    pub fn exit_code(&self) -> i32 {
        match self {
            SearchError::InvalidConfig(_) => 2,
            SearchError::FileNotFound { .. } => 3,
            SearchError::ParseError(_) => 4,
            SearchError::StructuralError { .. } => 5,
            SearchError::RenderError(_) => 6,
        }
    }
}

impl From<csv::Error> for SearchError {
    fn from(err: csv::Error) -> Self {
        SearchError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::RenderError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for SearchError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SearchError::ParseError(format!("file is not valid UTF-8: {}", err))
    }
}

/// Validation functions
///
/// The exact phase compares normalized text, so a query that normalizes to
/// nothing would match every row.
pub fn validate_query(query: &str) -> Result<(), SearchError> {
    if normalize(query).is_empty() {
        return Err(SearchError::InvalidConfig(
            "Search text cannot be empty or only spaces and commas".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_keywords(keywords: &[String]) -> Result<(), SearchError> {
    if let Some(pos) = keywords.iter().position(|k| k.is_empty()) {
        return Err(SearchError::InvalidConfig(format!(
            "Keyword {} is empty",
            pos + 1
        )));
    }

    Ok(())
}
