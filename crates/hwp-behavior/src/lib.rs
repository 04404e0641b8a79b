//! `hwp-behavior` — the cost-based lane-change decision FSM.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`state`]   | `VehicleState` — one traffic participant per snapshot     |
//! | [`traffic`] | `LaneTraffic` per-lane buckets, `LaneGaps` search         |
//! | [`memory`]  | `PlannerMemory` — the lane-recency value carried per tick |
//! | [`decide`]  | `decide` + `Decision` — uniform cost over candidates      |
//!
//! # Design notes
//!
//! The decision step is a pure function: it reads the ego state, the
//! bucketed traffic, and the carried [`PlannerMemory`], and returns a
//! [`Decision`] value.  The caller (hwp-planner) owns the memory and commits
//! the decision — nothing in this crate holds cross-tick state, so every
//! path through it is directly testable with literal inputs.
//!
//! All three candidate maneuvers run through one parameterized cost routine;
//! they differ only in which lane bucket they read and whether the
//! lane-change recency penalty applies.

pub mod decide;
pub mod memory;
pub mod state;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use decide::{Decision, decide};
pub use memory::PlannerMemory;
pub use state::VehicleState;
pub use traffic::{LaneGaps, LaneTraffic};
