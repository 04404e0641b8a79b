//! `hwp-planner` — per-tick cycle orchestration.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`telemetry`] | `TelemetrySnapshot`, `Inbound` decode, `PlannerResponse`|
//! | [`cycle`]     | `CycleState`, `CycleOutcome`, pure `plan_cycle`         |
//! | [`planner`]   | `Planner` — stateful wrapper owning map/config/state    |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                            |
//!
//! # Design notes
//!
//! `plan_cycle` is a pure function: map and config in by reference, the
//! carried [`CycleState`] in by value, the updated state back out in the
//! [`CycleOutcome`].  The two cross-tick values (lane-recency memory and
//! reference speed) never live in hidden globals, so any tick is
//! reproducible from its literal inputs.
//!
//! [`Planner`] owns one `CycleState` and commits it after each successful
//! cycle.  One planning cycle runs to completion per inbound snapshot; a
//! transport with concurrent connections must serialize calls to
//! [`Planner::plan`] (or thread `CycleState` itself) — the cycle must stay
//! atomic with respect to the carried state.

pub mod cycle;
pub mod error;
pub mod planner;
pub mod telemetry;


pub use cycle::{CycleOutcome, CycleState, plan_cycle};
pub use error::{PlanError, PlanResult};
pub use planner::Planner;
pub use telemetry::{Inbound, PlannerResponse, SensorRow, TelemetrySnapshot, decode_event};
