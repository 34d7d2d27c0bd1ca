//! colsearch CLI (Rust)
//!
//! Searches one column of a CSV file for a piece of text:
//! - Exact phase: case-insensitive containment ignoring spaces and commas
//! - Keyword phase: ordered fallback keywords, first keyword with a hit wins

mod cli;
mod config;
mod error;
mod report;
mod runner;
mod search;
mod table;

#[cfg(test)]
mod tests_search_run;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use error::SearchError;
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = load_and_run(&cli);

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            if cli.json {
                let body = serde_json::json!({
                    "error": e.error_code(),
                    "message": e.to_string(),
                });
                eprintln!("{}", body);
            } else {
                eprintln!("Error: {}", e);
            }
            let code = get_exit_code(&e, cli.always_succeed);
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
    }
}

/// Resolve configuration, run the search and render the report
fn load_and_run(cli: &Cli) -> Result<String, SearchError> {
    let base = config::load_config(cli.config.as_deref())
        .map_err(|e| SearchError::InvalidConfig(format!("{:#}", e)))?;
    let config = cli.search.clone().apply(base);
    debug!("Effective configuration: {:?}", config);

    let report = runner::execute_search(&config)?;
    info!("Search finished with {} reported row(s)", report.rows.len());

    if cli.json {
        Ok(report.to_json()?)
    } else {
        Ok(report.to_text())
    }
}

/// Map SearchError to exit code; `always_succeed` keeps the historical exit 0
fn get_exit_code(err: &SearchError, always_succeed: bool) -> i32 {
    if always_succeed {
        0
    } else {
        err.exit_code()
    }
}
