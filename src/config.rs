//! Search configuration
//!
//! Built-in defaults reproduce the original diagnostic run. A JSON file can
//! override them, and command-line flags override the file.

use crate::error::{validate_keywords, validate_query, SearchError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CSV_PATH: &str = "/workspaces/AI-No-code/src/data/Manu (1).csv";

pub const DEFAULT_SEARCH_TEXT: &str = "Product Design and Development,  Product Design (CAD, Simulation, Prototyping),  AIpowered digital twins, Accelerated product development and optimized testing processes";

/// Third column
pub const DEFAULT_TARGET_COLUMN: usize = 2;

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "Product Design and Development",
    "Product Design",
    "CAD",
    "Simulation",
    "Prototyping",
    "digital twins",
];

pub const DEFAULT_DELIMITER: char = ',';

/// Everything one search run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub csv_path: PathBuf,
    pub search_text: String,
    /// Zero-based column index searched by both phases
    pub target_column: usize,
    /// Fallback keywords, tried in order
    pub keywords: Vec<String>,
    pub delimiter: char,
    /// Trim whitespace around every cell and header
    pub trim: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            search_text: DEFAULT_SEARCH_TEXT.to_string(),
            target_column: DEFAULT_TARGET_COLUMN,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            delimiter: DEFAULT_DELIMITER,
            trim: false,
        }
    }
}

impl SearchConfig {
    /// Reject settings that would make every row match or cannot be parsed
    pub fn validate(&self) -> Result<(), SearchError> {
        validate_query(&self.search_text)?;
        validate_keywords(&self.keywords)?;
        self.delimiter_byte()?;
        Ok(())
    }

    /// Delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, SearchError> {
        if self.delimiter.is_ascii() && self.delimiter != '"' && self.delimiter != '\n' {
            Ok(self.delimiter as u8)
        } else {
            Err(SearchError::InvalidConfig(format!(
                "Delimiter {:?} must be a single ASCII character other than quote or newline",
                self.delimiter
            )))
        }
    }
}

/// Default location of the configuration file
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Cannot determine config directory")?;
    Ok(config_dir.join("colsearch").join("config.json"))
}

/// Load configuration from `explicit`, or from the default location.
///
/// A missing default file yields the built-in defaults; a missing explicit
/// file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<SearchConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Ok(path) if path.exists() => path,
            _ => return Ok(SearchConfig::default()),
        },
    };

    debug!("Reading config from {}", path.display());

    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: SearchConfig = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(config)
}
