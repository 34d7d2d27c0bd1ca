//! Presentation of search outcomes
//!
//! Text output mirrors the console flow of the diagnostic script:
//! - column listing and search header
//! - one block per matched row, `header: value` per cell
//! - dashed separators, 80 wide for exact hits and 40 for keyword hits

use crate::search::{RowMatch, SearchOutcome};
use crate::table::Table;
use serde::Serialize;

const SECTION_RULE: usize = 80;
const EXACT_RULE: usize = 80;
const KEYWORD_RULE: usize = 40;

/// A named cell in a reported row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportCell {
    pub column: String,
    pub value: String,
}

/// A reported row with cells paired to their headers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub row_number: usize,
    pub cells: Vec<ReportCell>,
}

/// Everything needed to present one search run
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub columns: Vec<String>,
    pub target_column: usize,
    pub target_column_name: String,
    pub search_text: String,
    pub outcome: SearchOutcome,
    pub rows: Vec<ReportRow>,
}

impl SearchReport {
    pub fn new(
        table: &Table,
        target_column: usize,
        search_text: &str,
        outcome: SearchOutcome,
    ) -> Self {
        let rows = outcome.rows().iter().map(|m| label_row(table, m)).collect();

        Self {
            columns: table.headers().to_vec(),
            target_column,
            target_column_name: table.column_name(target_column),
            search_text: search_text.to_string(),
            outcome,
            rows,
        }
    }

    /// Human-readable report
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Column names:\n");
        for (i, name) in self.columns.iter().enumerate() {
            out.push_str(&format!("Column {}: {}\n", i + 1, name));
        }
        out.push_str(&section_break());

        out.push_str(&format!(
            "Searching in column: '{}'\n",
            self.target_column_name
        ));
        out.push_str(&format!("Search text: '{}'\n", self.search_text));
        out.push_str(&section_break());

        match &self.outcome {
            SearchOutcome::Exact { .. } => {
                out.push_str(&format!("Found {} matching row(s):\n", self.rows.len()));
                out.push_str(&section_break());
                for row in &self.rows {
                    out.push_str(&format_row(row, EXACT_RULE));
                }
            }
            SearchOutcome::Keyword { keyword, .. } => {
                out.push_str("No exact matches found. Let me try a more flexible search...\n");
                out.push_str(&format!(
                    "Found {} row(s) containing '{}':\n",
                    self.rows.len(),
                    keyword
                ));
                for row in &self.rows {
                    out.push_str(&format_row(row, KEYWORD_RULE));
                }
            }
            SearchOutcome::NoMatch => {
                out.push_str("No exact matches found. Let me try a more flexible search...\n");
                out.push_str("No matches found even with flexible search.\n");
            }
        }

        out
    }

    /// Machine-readable report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Pair each cell with its header; cells past the header get `Column_{n}`
pub fn label_row(table: &Table, row: &RowMatch) -> ReportRow {
    ReportRow {
        row_number: row.row_number,
        cells: row
            .cells
            .iter()
            .enumerate()
            .map(|(i, value)| ReportCell {
                column: table.column_name(i),
                value: value.clone(),
            })
            .collect(),
    }
}

fn format_row(row: &ReportRow, rule: usize) -> String {
    let mut out = format!("Row {}:\n", row.row_number);
    for cell in &row.cells {
        out.push_str(&format!("{}: {}\n", cell.column, cell.value));
    }
    out.push('\n');
    out.push_str(&"-".repeat(rule));
    out.push_str("\n\n");
    out
}

fn section_break() -> String {
    format!("\n{}\n\n", "=".repeat(SECTION_RULE))
}
