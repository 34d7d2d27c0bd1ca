//! Two-phase row matcher
//!
//! Phase 1 looks for the normalized search text inside the normalized target
//! cell of every row. Only when that finds nothing does phase 2 walk the
//! keyword list in order, stopping at the first keyword that hits any row.

use super::normalize::{fold, normalize};
use crate::config::{SearchConfig, DEFAULT_TARGET_COLUMN};
use crate::error::SearchError;
use crate::table::{display_row_number, Table};
use serde::Serialize;
use tracing::{debug, info};

/// A matched data row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowMatch {
    /// Display row number (header is row 1)
    pub row_number: usize,
    /// Every cell of the row, in file order
    pub cells: Vec<String>,
}

/// Result of a completed search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Phase 1 hits
    Exact { rows: Vec<RowMatch> },
    /// Phase 2 hits for the first keyword that matched anything
    Keyword { keyword: String, rows: Vec<RowMatch> },
    /// Neither phase found a row
    NoMatch,
}

impl SearchOutcome {
    pub fn rows(&self) -> &[RowMatch] {
        match self {
            SearchOutcome::Exact { rows } | SearchOutcome::Keyword { rows, .. } => rows,
            SearchOutcome::NoMatch => &[],
        }
    }
}

/// Matcher over a single positional column
#[derive(Debug, Clone)]
pub struct RowMatcher {
    column: usize,
    query: String,
    keywords: Vec<String>,
}

impl RowMatcher {
    /// Matcher for `query` on the default column with no fallback keywords
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            column: DEFAULT_TARGET_COLUMN,
            query: query.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.search_text.clone())
            .with_column(config.target_column)
            .with_keywords(config.keywords.iter().cloned())
    }

    /// Run both phases against `table`
    pub fn search(&self, table: &Table) -> Result<SearchOutcome, SearchError> {
        self.check_structure(table)?;

        info!(
            "Searching column {} ('{}') of {} rows",
            self.column + 1,
            table.column_name(self.column),
            table.rows().len()
        );

        let exact = self.exact_matches(table);
        if !exact.is_empty() {
            info!("Found {} exact match(es)", exact.len());
            return Ok(SearchOutcome::Exact { rows: exact });
        }

        info!("No exact matches, trying {} keyword(s)", self.keywords.len());
        for keyword in &self.keywords {
            let rows = self.keyword_matches(table, keyword);
            debug!("Keyword '{}' matched {} row(s)", keyword, rows.len());
            if !rows.is_empty() {
                return Ok(SearchOutcome::Keyword {
                    keyword: keyword.clone(),
                    rows,
                });
            }
        }

        Ok(SearchOutcome::NoMatch)
    }

    /// Phase 1: every row whose normalized target cell contains the normalized query
    pub fn exact_matches(&self, table: &Table) -> Vec<RowMatch> {
        let needle = normalize(&self.query);
        self.collect_matching(table, |cell| normalize(cell).contains(&needle))
    }

    /// Phase 2 for one keyword: case-folded containment, no stripping
    pub fn keyword_matches(&self, table: &Table, keyword: &str) -> Vec<RowMatch> {
        let needle = fold(keyword);
        self.collect_matching(table, |cell| fold(cell).contains(&needle))
    }

    fn check_structure(&self, table: &Table) -> Result<(), SearchError> {
        let required = self.column + 1;
        if table.column_count() < required {
            return Err(SearchError::StructuralError {
                columns: table.column_count(),
                required,
            });
        }
        Ok(())
    }

    fn collect_matching<F>(&self, table: &Table, predicate: F) -> Vec<RowMatch>
    where
        F: Fn(&str) -> bool,
    {
        let mut skipped = 0usize;
        let mut matches = Vec::new();

        for (index, row) in table.rows().iter().enumerate() {
            let Some(cell) = row.get(self.column) else {
                skipped += 1;
                continue;
            };

            if predicate(cell) {
                matches.push(RowMatch {
                    row_number: display_row_number(index),
                    cells: row.clone(),
                });
            }
        }

        if skipped > 0 {
            debug!("Skipped {} row(s) shorter than {} cells", skipped, self.column + 1);
        }

        matches
    }
}
