//! One counting run end to end.
//!
//! # Error Handling Strategy
//!
//! The runner validates the request before touching any file, then runs a
//! straight pipeline: load each input, aggregate, write the enabled logs.
//! Any failure aborts the whole run with a typed error and no partial log;
//! a cancelled run behaves the same way. Nothing is retried, and nothing
//! about a failed run needs cleaning up before the next one.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::Local;

use crate::aggregate::{CancelToken, aggregate};
use crate::error::{CountError, Result};
use crate::loader::{ColumnSpec, load_records};
use crate::models::{DateRange, Summary};
use crate::report::LogOptions;

/// At most two input files per run.
const MAX_INPUT_FILES: usize = 2;

/// Everything needed to execute one counting run.
#[derive(Debug, Clone)]
pub struct CountRequest {
    /// One or two spreadsheet files, concatenated in order with no merge
    /// semantics; duplicates across files are counted twice.
    pub files: Vec<PathBuf>,
    pub columns: ColumnSpec,
    pub range: DateRange,
    pub logs: LogOptions,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct CountOutcome {
    pub summary: Summary,
    /// Log files written for this run, in the order they were produced.
    pub log_paths: Vec<PathBuf>,
    /// Wall-clock processing time. A diagnostic only; it never influences
    /// the summary.
    pub elapsed: Duration,
}

/// Execute a run synchronously on the calling thread.
///
/// The token is polled between pipeline stages and inside the aggregation
/// loop. A cancelled run returns [`CountError::Cancelled`] with no summary
/// and no log artifact.
pub fn run(request: &CountRequest, cancel: &CancelToken) -> Result<CountOutcome> {
    if request.files.is_empty() {
        return Err(CountError::Validation("no input file selected".to_string()));
    }
    if request.files.len() > MAX_INPUT_FILES {
        return Err(CountError::Validation(format!(
            "at most {} input files are supported, got {}",
            MAX_INPUT_FILES,
            request.files.len()
        )));
    }

    let started = Instant::now();

    let mut records = Vec::new();
    for path in &request.files {
        if cancel.is_cancelled() {
            return Err(CountError::Cancelled);
        }
        records.extend(load_records(path, &request.columns)?);
    }

    let summary = aggregate(&records, &request.range, cancel)?;

    if cancel.is_cancelled() {
        return Err(CountError::Cancelled);
    }
    let log_paths = request.logs.write_logs(&request.range, &summary, Local::now())?;

    Ok(CountOutcome { summary, log_paths, elapsed: started.elapsed() })
}

/// Execute a run on a dedicated worker thread.
///
/// The interactive caller keeps its clone of the token and may set it to
/// stop the worker, then joins the handle for the outcome. One worker per
/// run; nothing else is shared.
pub fn spawn(request: CountRequest, cancel: CancelToken) -> JoinHandle<Result<CountOutcome>> {
    thread::spawn(move || run(&request, &cancel))
}
