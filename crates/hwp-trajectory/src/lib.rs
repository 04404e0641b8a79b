//! `hwp-trajectory` — smooth trajectory synthesis and speed control.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`spline`]    | `Spline` — natural cubic interpolant through anchors   |
//! | [`frame`]     | `RefFrame` — vehicle-frame translate/rotate transform  |
//! | [`speed`]     | `ramp_reference_speed` — bounded per-tick speed ramp   |
//! | [`anchors`]   | Continuity + forward anchor construction               |
//! | [`generator`] | `generate` — the 50-point resampling walk              |
//! | [`error`]     | `TrajectoryError`, `TrajectoryResult<T>`               |
//!
//! # Pipeline
//!
//! Each tick: pick 2 continuity anchors off the previous trajectory's tail
//! (or synthesize them tangent to ego's heading), add 3 forward anchors
//! spaced along the target lane, rotate everything into the frame of the
//! second continuity anchor, fit a cubic spline, then walk the spline in
//! even x steps sized so consecutive points are one tick apart at the
//! reference speed.  The retained tail is emitted untouched ahead of the
//! newly generated points, which is what keeps the path continuous across
//! ticks.

pub mod anchors;
pub mod error;
pub mod frame;
pub mod generator;
pub mod speed;
pub mod spline;

#[cfg(test)]
mod tests;

pub use anchors::AnchorSet;
pub use error::{TrajectoryError, TrajectoryResult};
pub use frame::RefFrame;
pub use generator::{TrajectoryRequest, generate};
pub use speed::ramp_reference_speed;
pub use spline::Spline;
