//! `hwp-core` — foundational types for the `rust_hwp` highway planner.
//!
//! This crate is a dependency of every other `hwp-*` crate.  It intentionally
//! has no `hwp-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`ids`]      | `VehicleId`, `LaneId`                                |
//! | [`point`]    | `CartesianPoint`, `FrenetPoint`                      |
//! | [`maneuver`] | `Maneuver` enum                                      |
//! | [`config`]   | `PlannerConfig` — every tuning constant in one place |
//! | [`error`]    | `HwpError`, `HwpResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod config;
pub mod error;
pub mod ids;
pub mod maneuver;
pub mod point;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{HwpError, HwpResult};
pub use ids::{LaneId, VehicleId};
pub use maneuver::Maneuver;
pub use point::{CartesianPoint, FrenetPoint};
