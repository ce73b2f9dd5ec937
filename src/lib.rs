//! Testname Counter - count spreadsheet rows per test name by date range
//!
//! This library reads one or two spreadsheet files, keeps the rows whose
//! date falls inside an inclusive calendar range, and counts them per test
//! name. It supports:
//!
//! - Loading `.xlsx`/`.xls`/`.ods` files with exact header-name matching
//! - Inclusive date-range filtering with cooperative cancellation
//! - Summaries with a total, an `"Adm"` count, an adjusted total, and
//!   per-testname counts
//! - Timestamped delimited and workbook log outputs
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use chrono::NaiveDate;
//! use testname_counter::aggregate::{CancelToken, aggregate};
//! use testname_counter::loader::{ColumnSpec, load_records};
//! use testname_counter::models::DateRange;
//!
//! let records = load_records(Path::new("tests.xlsx"), &ColumnSpec::default())?;
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
//! );
//! let summary = aggregate(&records, &range, &CancelToken::new())?;
//! println!("Adjusted total: {}", summary.adjusted_count);
//! # Ok::<(), testname_counter::error::CountError>(())
//! ```

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use aggregate::{CancelToken, aggregate};
pub use error::CountError;
pub use loader::{ColumnSpec, load_records};
pub use models::{DateRange, Record, Summary};
pub use report::LogOptions;
pub use runner::{CountOutcome, CountRequest};
