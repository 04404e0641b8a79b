//! Track map loader.
//!
//! # File format
//!
//! One row per centerline waypoint, space-delimited, no header, in track
//! order:
//!
//! ```text
//! x y s dx dy
//! 784.6001 1135.571 0.0 -0.02359831 -0.9997216
//! 815.2679 1134.93 30.6744785309 -0.01099479 -0.9999396
//! ```
//!
//! `(dx, dy)` is the unit lane normal at the sample.  `s` must be strictly
//! increasing in file order; the wraparound at `max_s` happens between the
//! last row and the first, never inside the file.
//!
//! The loader reads the whole file eagerly — track maps are a few hundred
//! rows, so streaming buys nothing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{MapError, MapResult, TrackMap, Waypoint};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    x:  f64,
    y:  f64,
    s:  f64,
    dx: f64,
    dy: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`TrackMap`] from a waypoint file.
///
/// A missing or unreadable file is fatal at startup — the planner cannot run
/// without a track.
pub fn load_track_csv(path: &Path, max_s: f64) -> MapResult<TrackMap> {
    let file = std::fs::File::open(path).map_err(MapError::Io)?;
    load_track_reader(file, max_s)
}

/// Like [`load_track_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded map data.
pub fn load_track_reader<R: Read>(reader: R, max_s: f64) -> MapResult<TrackMap> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut waypoints = Vec::new();
    for result in csv_reader.deserialize::<WaypointRecord>() {
        let row = result.map_err(|e| MapError::Parse(e.to_string()))?;
        waypoints.push(Waypoint {
            x:  row.x,
            y:  row.y,
            s:  row.s,
            dx: row.dx,
            dy: row.dy,
        });
    }

    TrackMap::new(waypoints, max_s)
}
