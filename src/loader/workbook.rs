//! Workbook reading built on calamine.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use super::ColumnSpec;
use super::cells::{date_from_cell, label_from_cell};
use crate::error::{CountError, Result};
use crate::models::Record;

/// Load records from the first worksheet of a spreadsheet file.
///
/// The first row is the header row and must contain both required column
/// names as exact, case-sensitive matches. Rows missing a date or test
/// name, and rows whose date cell is not a recognizable calendar date, are
/// skipped. Output order follows source row order; nothing is deduplicated.
///
/// # Errors
///
/// - [`CountError::Io`] if the file is missing or unreadable
/// - [`CountError::Format`] if the file is not a recognizable spreadsheet
///   or has no worksheets
/// - [`CountError::Schema`] if a required column is absent
pub fn load_records(path: &Path, columns: &ColumnSpec) -> Result<Vec<Record>> {
    let mut workbook = open_workbook_auto(path).map_err(|err| open_error(path, err))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CountError::format(path, "workbook has no worksheets"))?
        .map_err(|err| open_error(path, err))?;

    extract_records(path, &range, columns)
}

fn open_error(path: &Path, err: calamine::Error) -> CountError {
    match err {
        calamine::Error::Io(source) => CountError::io(path, source),
        other => CountError::format(path, other.to_string()),
    }
}

fn extract_records(path: &Path, range: &Range<Data>, columns: &ColumnSpec) -> Result<Vec<Record>> {
    let mut rows = range.rows();
    let header =
        rows.next().ok_or_else(|| CountError::format(path, "worksheet has no header row"))?;

    let date_idx =
        column_index(header, &columns.date).ok_or_else(|| missing_column(path, &columns.date))?;
    let label_idx =
        column_index(header, &columns.label).ok_or_else(|| missing_column(path, &columns.label))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        let date = row.get(date_idx).and_then(date_from_cell);
        let label = row.get(label_idx).and_then(label_from_cell);
        match (date, label) {
            (Some(date), Some(label)) => records.push(Record::new(date, label)),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        eprintln!(
            "Skipped {} row(s) without a usable date and test name in {}",
            skipped,
            path.display()
        );
    }

    Ok(records)
}

/// Header names are exact, case-sensitive matches.
fn column_index(header: &[Data], name: &str) -> Option<usize> {
    header.iter().position(|cell| matches!(cell, Data::String(text) if text == name))
}

fn missing_column(path: &Path, column: &str) -> CountError {
    CountError::Schema { path: path.to_path_buf(), column: column.to_string() }
}
