//! Planner-subsystem error type.

use thiserror::Error;

use hwp_trajectory::TrajectoryError;

/// Errors produced by `hwp-planner`.
///
/// Malformed telemetry is deliberately *not* an error: it decodes to
/// [`Inbound::Unrecognized`][crate::Inbound] and the caller emits the
/// neutral no-instruction response.  What remains is trajectory synthesis
/// failing, which cannot occur through well-formed snapshots but guards
/// direct library use.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("trajectory synthesis failed: {0}")]
    Trajectory(#[from] TrajectoryError),
}

pub type PlanResult<T> = Result<T, PlanError>;
