// file: src/parser/table.rs
// description: pipe-delimited markdown table parsing into incident records
// reference: https://github.github.com/gfm/#tables-extension-

use crate::models::{COLUMN_COUNT, IncidentBuilder, IncidentRecord};
use serde::Serialize;
use tracing::debug;

const HEADER_LINES: usize = 2;
const SEPARATOR_MARKER: &str = "|---";

pub struct TableParser;

#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub records: Vec<IncidentRecord>,
    pub report: ParseReport,
}

/// Row accounting for a single parse. Skips are never surfaced as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub data_rows: usize,
    pub short_rows: usize,
    pub invalid_numeric_rows: usize,
}

impl ParseReport {
    pub fn skipped(&self) -> usize {
        self.short_rows + self.invalid_numeric_rows
    }
}

#[derive(Debug, PartialEq, Eq)]
enum RowError {
    TooFewColumns(usize),
    InvalidNumber { column: &'static str, value: String },
}

impl TableParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &str) -> Vec<IncidentRecord> {
        self.parse_with_report(content).records
    }

    pub fn parse_with_report(&self, content: &str) -> ParsedTable {
        let mut parsed = ParsedTable::default();

        for (index, raw) in content.trim().lines().enumerate().skip(HEADER_LINES) {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(SEPARATOR_MARKER) {
                continue;
            }

            parsed.report.data_rows += 1;
            match self.parse_row(line) {
                Ok(record) => parsed.records.push(record),
                Err(RowError::TooFewColumns(found)) => {
                    debug!("Skipping line {}: {} of {} columns", index + 1, found, COLUMN_COUNT);
                    parsed.report.short_rows += 1;
                }
                Err(RowError::InvalidNumber { column, value }) => {
                    debug!("Skipping line {}: invalid {} '{}'", index + 1, column, value);
                    parsed.report.invalid_numeric_rows += 1;
                }
            }
        }

        parsed
    }

    fn parse_row(&self, line: &str) -> Result<IncidentRecord, RowError> {
        let cells = split_cells(line);
        if cells.len() < COLUMN_COUNT {
            return Err(RowError::TooFewColumns(cells.len()));
        }

        let record = IncidentBuilder::new()
            .country(cells[0])
            .year(parse_number("year", cells[1])?)
            .attack_type(cells[2])
            .target_industry(cells[3])
            .financial_loss(parse_amount("financial loss", cells[4])?)
            .affected_users(parse_number("affected users", cells[5])?)
            .attack_source(cells[6])
            .security_vulnerability(cells[7])
            .defense_mechanism(cells[8])
            .resolution_time(parse_amount("resolution time", cells[9])?)
            .build();

        // Every field was supplied above.
        record.ok_or(RowError::TooFewColumns(cells.len()))
    }
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn parse_number<T: std::str::FromStr>(column: &'static str, value: &str) -> Result<T, RowError> {
    value.parse().map_err(|_| RowError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}

/// Non-negative finite decimal.
fn parse_amount(column: &'static str, value: &str) -> Result<f64, RowError> {
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(RowError::InvalidNumber {
            column,
            value: value.to_string(),
        }),
    }
}
