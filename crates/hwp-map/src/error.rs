//! Map-subsystem error type.

use thiserror::Error;

/// Errors produced by `hwp-map`.
///
/// A missing or malformed map file is a startup-time fatal condition: the
/// planner cannot run without a track, so these surface to `main` rather
/// than being handled per cycle.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("track needs at least {min} waypoints, got {got}")]
    TooFewWaypoints { min: usize, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type MapResult<T> = Result<T, MapError>;
