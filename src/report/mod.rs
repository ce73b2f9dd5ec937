//! Run logs: the delimited text format and the workbook format.
//!
//! Both formats carry the same information and are independently
//! selectable. Filenames are timestamped at write time so runs never
//! overwrite each other; nothing is appended across runs.

pub mod delimited;
pub mod error_log;
pub mod workbook;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::models::{DateRange, Summary};

/// Timestamp layout used in log filenames.
const FILENAME_STAMP: &str = "%Y-%m-%d_%H-%M-%S";

/// Human-readable timestamp written inside the logs ("Search Made").
const SEARCH_STAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Which log outputs a run should produce, and where.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub delimited: bool,
    pub workbook: bool,
    pub dir: PathBuf,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { delimited: true, workbook: false, dir: PathBuf::from(".") }
    }
}

impl LogOptions {
    /// Write every enabled log for the run, returning the paths produced.
    pub fn write_logs(
        &self,
        range: &DateRange,
        summary: &Summary,
        searched_at: DateTime<Local>,
    ) -> Result<Vec<PathBuf>> {
        let stamp = searched_at.format(FILENAME_STAMP).to_string();
        let search_time = searched_at.format(SEARCH_STAMP).to_string();

        let mut written = Vec::new();
        if self.delimited {
            let path = log_path(&self.dir, &stamp, "csv");
            delimited::write_log(&path, range, summary, &search_time)?;
            written.push(path);
        }
        if self.workbook {
            let path = log_path(&self.dir, &stamp, "xlsx");
            workbook::write_log(&path, range, summary, &search_time)?;
            written.push(path);
        }
        Ok(written)
    }
}

fn log_path(dir: &Path, stamp: &str, extension: &str) -> PathBuf {
    dir.join(format!("Log_{}.{}", stamp, extension))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{NaiveDate, TimeZone};

    use super::*;

    #[test]
    fn test_log_path_layout() {
        let path = log_path(Path::new("/tmp/logs"), "2024-06-15_10-30-00", "csv");
        assert_eq!(path, PathBuf::from("/tmp/logs/Log_2024-06-15_10-30-00.csv"));
    }

    #[test]
    fn test_disabled_logs_write_nothing() {
        let options = LogOptions { delimited: false, workbook: false, dir: PathBuf::from(".") };
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        let summary = Summary::new(0, 0, BTreeMap::new());
        let searched_at = Local.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();

        let written = options.write_logs(&range, &summary, searched_at).unwrap();
        assert!(written.is_empty());
    }
}
