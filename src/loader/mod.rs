//! Spreadsheet loading.
//!
//! # Error Handling Strategy
//!
//! The loader separates structural problems from bad rows:
//!
//! - **File-level errors**: an unreadable file, an unrecognized format, or
//!   a header row missing a required column aborts the load with a typed
//!   error the CLI can surface as a single message.
//!
//! - **Row-level problems**: a row whose date or test name cell is empty,
//!   or whose date cell is not a recognizable calendar date, is skipped.
//!   A count of skipped rows is reported on stderr so the user can judge
//!   input quality, but a handful of bad rows never fails a run.

mod cells;
pub mod workbook;

pub use workbook::load_records;

/// Header name of the date column in the spreadsheets this tool was built
/// for ("received date").
pub const DEFAULT_DATE_COLUMN: &str = "Indatum";

/// Header name of the test name column.
pub const DEFAULT_LABEL_COLUMN: &str = "Testnamn";

/// Names of the two required columns, matched exactly (case-sensitive)
/// against the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub date: String,
    pub label: String,
}

impl ColumnSpec {
    pub fn new(date: impl Into<String>, label: impl Into<String>) -> Self {
        Self { date: date.into(), label: label.into() }
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_COLUMN, DEFAULT_LABEL_COLUMN)
    }
}
