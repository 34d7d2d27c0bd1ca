//! Command-line interface
//!
//! Every flag is optional; anything left unset falls back to the config file
//! and then to the built-in defaults.

use crate::config::SearchConfig;
use clap::Parser;
use std::path::PathBuf;

/// colsearch CLI
#[derive(Parser, Debug)]
#[command(name = "colsearch")]
#[command(about = "Search a CSV column, falling back to keyword matches", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub search: SearchArgs,

    /// JSON config file (defaults to the platform config directory)
    #[arg(long, env = "COLSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 0 even when the search fails
    #[arg(long)]
    pub always_succeed: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// Search arguments
#[derive(Parser, Clone, Debug, Default)]
pub struct SearchArgs {
    /// CSV file to search, or `-` for standard input
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Text to look for in the target column
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Zero-based index of the column to search
    #[arg(short = 'c', long)]
    pub column: Option<usize>,

    /// Fallback keyword, tried in the order given (repeatable)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// Field delimiter
    #[arg(short = 'd', long)]
    pub delimiter: Option<char>,

    /// Trim whitespace around cells
    #[arg(long)]
    pub trim: bool,
}

impl SearchArgs {
    /// Overlay the flags that were given onto `config`
    pub fn apply(self, mut config: SearchConfig) -> SearchConfig {
        if let Some(file) = self.file {
            config.csv_path = file;
        }
        if let Some(query) = self.query {
            config.search_text = query;
        }
        if let Some(column) = self.column {
            config.target_column = column;
        }
        if !self.keywords.is_empty() {
            config.keywords = self.keywords;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if self.trim {
            config.trim = true;
        }
        config
    }
}
