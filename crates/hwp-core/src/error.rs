//! Top-level error type.
//!
//! Sub-crates define their own error enums (`MapError`, `TrajectoryError`, …)
//! and either convert into `HwpError` via `From` impls or stay separate.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `hwp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HwpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `hwp-*` crates.
pub type HwpResult<T> = Result<T, HwpError>;
