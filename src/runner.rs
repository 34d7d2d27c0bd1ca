//! One search run: validate, load, match, build the report

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::report::SearchReport;
use crate::search::RowMatcher;
use crate::table::{CsvLoader, TableLoader};
use tracing::info;

/// Run the search described by `config` using the default CSV loader
pub fn execute_search(config: &SearchConfig) -> Result<SearchReport, SearchError> {
    let loader = CsvLoader::new()
        .with_delimiter(config.delimiter_byte()?)
        .with_trim(config.trim);
    execute_search_with(config, &loader)
}

/// Run the search with an explicit loader
pub fn execute_search_with<L: TableLoader>(
    config: &SearchConfig,
    loader: &L,
) -> Result<SearchReport, SearchError> {
    config.validate()?;

    let table = loader.load(&config.csv_path)?;
    info!(
        "Loaded {} columns, {} data rows from {}",
        table.column_count(),
        table.rows().len(),
        config.csv_path.display()
    );

    let outcome = RowMatcher::from_config(config).search(&table)?;

    Ok(SearchReport::new(
        &table,
        config.target_column,
        &config.search_text,
        outcome,
    ))
}
