//! Core error type.
//!
//! Downstream crates either wrap `CoreError` as one variant of their own enum
//! (`SimError::Config`) or convert it through `From`.

use thiserror::Error;

/// The top-level error type for `dts-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dts-core`.
pub type CoreResult<T> = Result<T, CoreError>;
