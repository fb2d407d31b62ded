//! Error types for dts-output.

use dts_sim::{SimError, UnknownEntryKind};
use thiserror::Error;

/// Errors that can occur when exporting or re-reading results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("event log row: {0}")]
    UnknownEventType(#[from] UnknownEntryKind),

    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
