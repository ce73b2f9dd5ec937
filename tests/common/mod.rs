//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Builder for spreadsheet fixture files
///
/// Cells are written as strings; the loader's date coercion accepts
/// `YYYY-MM-DD` text, so fixtures stay readable. An empty string leaves
/// the cell blank.
pub struct SheetBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetBuilder {
    /// Start a sheet with the default column layout (Indatum, Testnamn)
    pub fn new() -> Self {
        Self::with_headers(&["Indatum", "Testnamn"])
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self { headers: headers.iter().map(|h| h.to_string()).collect(), rows: Vec::new() }
    }

    /// Add a row of string cells; empty strings become blank cells
    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Write the sheet to `<dir>/<name>` as an xlsx workbook
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (col, header) in self.headers.iter().enumerate() {
            sheet.write_string(0, col as u16, header.as_str()).expect("Failed to write header");
        }
        for (row_idx, row) in self.rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    sheet
                        .write_string(row_idx as u32 + 1, col as u16, cell.as_str())
                        .expect("Failed to write cell");
                }
            }
        }

        workbook.save(&path).expect("Failed to save fixture workbook");
        path
    }
}

impl Default for SheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh temp dir for fixture files and run logs
pub fn fixture_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A workbook with the documented example rows: three January records
/// (one of them Adm) and one February record
pub fn sample_sheet(dir: &Path, name: &str) -> PathBuf {
    SheetBuilder::new()
        .row(&["2024-01-01", "Adm"])
        .row(&["2024-01-02", "X"])
        .row(&["2024-01-03", "X"])
        .row(&["2024-02-01", "Y"])
        .write_to(dir, name)
}

/// Paths of the `Log_*` files currently in the directory
pub fn log_files(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("Failed to read log dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("Log_"))
        })
        .collect();
    paths.sort();
    paths
}
