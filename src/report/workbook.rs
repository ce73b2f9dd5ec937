//! The workbook log format.
//!
//! Two sheets: `Summary` with one row of summary fields, and `Testname
//! Counts` with one row per test name. Same information as the delimited
//! log, for users who open the result straight in a spreadsheet program.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::error::{CountError, Result};
use crate::models::{DateRange, Summary};

const SUMMARY_SHEET: &str = "Summary";
const COUNTS_SHEET: &str = "Testname Counts";

const SUMMARY_HEADERS: [&str; 5] =
    ["Date Range", "Total Count", "Adm Count", "Adjusted Total (Excluding 'Adm')", "Search Made"];

/// Write the two-sheet workbook log.
pub fn write_log(
    path: &Path,
    range: &DateRange,
    summary: &Summary,
    search_time: &str,
) -> Result<()> {
    build(range, summary, search_time)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|source| CountError::LogWrite { path: path.to_path_buf(), source })
}

fn build(
    range: &DateRange,
    summary: &Summary,
    search_time: &str,
) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;
    write_summary_sheet(sheet, range, summary, search_time)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(COUNTS_SHEET)?;
    write_counts_sheet(sheet, summary)?;

    Ok(workbook)
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    range: &DateRange,
    summary: &Summary,
    search_time: &str,
) -> std::result::Result<(), XlsxError> {
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    sheet.write_string(1, 0, format!("{} to {}", range.start, range.end))?;
    sheet.write_number(1, 1, summary.total_count as f64)?;
    sheet.write_number(1, 2, summary.adm_count as f64)?;
    sheet.write_number(1, 3, summary.adjusted_count as f64)?;
    sheet.write_string(1, 4, search_time)?;
    Ok(())
}

fn write_counts_sheet(
    sheet: &mut Worksheet,
    summary: &Summary,
) -> std::result::Result<(), XlsxError> {
    sheet.write_string(0, 0, "Testname")?;
    sheet.write_string(0, 1, "Count")?;
    for (row, (label, count)) in summary.label_counts.iter().enumerate() {
        sheet.write_string(row as u32 + 1, 0, label.as_str())?;
        sheet.write_number(row as u32 + 1, 1, *count as f64)?;
    }
    Ok(())
}
