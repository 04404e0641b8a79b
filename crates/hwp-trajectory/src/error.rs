//! Trajectory-subsystem error type.

use thiserror::Error;

/// Errors produced by `hwp-trajectory`.
///
/// None of these occur through the public planning pipeline, which always
/// supplies five anchors in strictly increasing local-frame x; they guard
/// direct library use of [`Spline`][crate::Spline].
#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("spline needs at least {min} anchors, got {got}")]
    TooFewAnchors { min: usize, got: usize },

    #[error("anchor x values must be strictly increasing")]
    NonIncreasingX,

    #[error("spline system is singular")]
    Singular,
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;
