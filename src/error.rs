//! Error types shared across the counting pipeline.
//!
//! Every failure class maps to its own user-visible message at the CLI, so
//! the variants stay coarse: what went wrong and which file it concerns.
//! None of them are retried; a failed or cancelled run writes no log and
//! leaves the process in a clean, re-runnable state.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CountError>;

/// Everything that can abort a counting run.
#[derive(Debug, Error)]
pub enum CountError {
    /// An input file is missing or unreadable, or a log file could not be
    /// written.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required column is absent from the file's header row.
    #[error("required column '{column}' not found in {path}")]
    Schema { path: PathBuf, column: String },

    /// The file is not a spreadsheet this tool understands.
    #[error("unrecognized spreadsheet {path}: {reason}")]
    Format { path: PathBuf, reason: String },

    /// The request was rejected before any processing started.
    #[error("{0}")]
    Validation(String),

    /// The workbook log could not be produced.
    #[error("failed to write log workbook {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// The run was stopped through its cancellation token. No summary was
    /// produced and no log was written.
    #[error("the search was stopped before completion")]
    Cancelled,
}

impl CountError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn format(path: &Path, reason: impl Into<String>) -> Self {
        Self::Format { path: path.to_path_buf(), reason: reason.into() }
    }
}
