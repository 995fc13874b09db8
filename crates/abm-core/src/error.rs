//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `AbmError` as one
//! variant where they need to forward configuration failures.

use thiserror::Error;

/// The top-level error type for `abm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AbmError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `abm-*` crates.
pub type AbmResult<T> = Result<T, AbmError>;
