//! Persistent record of unexpected failures.
//!
//! Failures outside the normal error taxonomy are appended with a
//! timestamp and their full diagnostic chain to `error.log`, and the user
//! sees only a generic message. The run still ends in a clean, re-runnable
//! state.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;

/// Filename of the error record, created next to the run logs.
pub const ERROR_LOG_FILENAME: &str = "error.log";

/// Append a timestamped diagnostic entry for an unexpected failure.
///
/// Best-effort: if the record itself cannot be written, the failure is
/// reported on stderr and otherwise ignored.
pub fn record(dir: &Path, error: &anyhow::Error) {
    let path = dir.join(ERROR_LOG_FILENAME);
    let entry =
        format!("{} - ERROR - {:#}\n", Local::now().format("%Y-%m-%d %H:%M:%S"), error);

    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| file.write_all(entry.as_bytes()));

    if let Err(err) = result {
        eprintln!("Warning: failed to record error in {}: {}", path.display(), err);
    }
}
