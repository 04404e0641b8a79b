//! `hwp-map` — track centerline map and coordinate conversion.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`track`]  | `Waypoint`, `TrackMap` (circular sequence + R-tree),      |
//! |            | `to_frenet` / `to_cartesian`                              |
//! | [`loader`] | `load_track_csv` / `load_track_reader`                    |
//! | [`error`]  | `MapError`, `MapResult<T>`                                |
//!
//! # Coordinate conventions
//!
//! The map is an ordered sequence of centerline samples treated as circular:
//! index arithmetic wraps modulo the waypoint count, and the longitudinal
//! coordinate `s` wraps at `max_s`.  Waypoints are sampled finely enough
//! that linear interpolation between consecutive samples approximates the
//! road curve, so `to_cartesian` inverts `to_frenet` only up to that
//! sampling resolution — round trips are close, not bit-exact.

pub mod error;
pub mod loader;
pub mod track;


pub use error::{MapError, MapResult};
pub use loader::{load_track_csv, load_track_reader};
pub use track::{TrackMap, Waypoint};
