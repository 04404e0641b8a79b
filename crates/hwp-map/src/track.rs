//! Track map representation and Cartesian↔Frenet conversion.
//!
//! # Data layout
//!
//! Waypoints are stored in track order.  Alongside them the constructor
//! precomputes `arc`, the accumulated chord length up to each waypoint, so
//! `to_frenet` is O(1) in arithmetic after the nearest-waypoint query
//! instead of re-summing the whole prefix per call.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to the nearest waypoint index.
//! Every `to_frenet` call starts with this query, so it is the hot lookup
//! of the conversion path.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use hwp_core::{CartesianPoint, FrenetPoint};

use crate::{MapError, MapResult};

// ── R-tree waypoint entry ─────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// waypoint's position in track order.
#[derive(Clone)]
struct WaypointEntry {
    point: [f64; 2],
    idx: u32,
}

impl RTreeObject for WaypointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for WaypointEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// One centerline sample: world position, longitudinal coordinate, and the
/// unit normal pointing toward positive `d` (the right of travel direction).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub s: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Waypoint {
    #[inline]
    pub fn position(&self) -> CartesianPoint {
        CartesianPoint::new(self.x, self.y)
    }
}

// ── TrackMap ──────────────────────────────────────────────────────────────────

/// Reference point used to sign `d`: a location known to be off to the left
/// of the original loop track's centerline.  Override per map via
/// [`TrackMap::with_sign_reference`].
const DEFAULT_SIGN_REFERENCE: CartesianPoint = CartesianPoint { x: 1_000.0, y: 2_000.0 };

/// Immutable closed-loop track map.
///
/// Loaded once at startup (see [`crate::load_track_csv`]) and read-only for
/// the process lifetime; conversions take `&self` and allocate nothing.
pub struct TrackMap {
    waypoints: Vec<Waypoint>,
    /// Accumulated chord length up to each waypoint; `arc[0] == 0`.
    arc: Vec<f64>,
    /// Track length at which `s` wraps back to 0.
    max_s: f64,
    /// Point off to the left of the centerline, used to sign `d`.
    sign_ref: CartesianPoint,
    spatial_idx: RTree<WaypointEntry>,
}

impl TrackMap {
    /// Build a map from waypoints in track order.
    ///
    /// Requires at least 2 waypoints (one segment) — the conversion math
    /// projects onto the segment between consecutive samples.
    pub fn new(waypoints: Vec<Waypoint>, max_s: f64) -> MapResult<Self> {
        if waypoints.len() < 2 {
            return Err(MapError::TooFewWaypoints { min: 2, got: waypoints.len() });
        }

        let mut arc = Vec::with_capacity(waypoints.len());
        arc.push(0.0);
        for pair in waypoints.windows(2) {
            let prev = arc[arc.len() - 1];
            arc.push(prev + pair[0].position().distance(pair[1].position()));
        }

        let entries: Vec<WaypointEntry> = waypoints
            .iter()
            .enumerate()
            .map(|(i, w)| WaypointEntry { point: [w.x, w.y], idx: i as u32 })
            .collect();

        Ok(Self {
            waypoints,
            arc,
            max_s,
            sign_ref: DEFAULT_SIGN_REFERENCE,
            spatial_idx: RTree::bulk_load(entries),
        })
    }

    /// Replace the lateral-sign reference point (must lie off to the left
    /// of the centerline everywhere along the track).
    pub fn with_sign_reference(mut self, point: CartesianPoint) -> Self {
        self.sign_ref = point;
        self
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn max_s(&self) -> f64 {
        self.max_s
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    // ── Waypoint queries ──────────────────────────────────────────────────

    /// Index of the waypoint nearest to `(x, y)` by Euclidean distance.
    pub fn closest_waypoint(&self, x: f64, y: f64) -> usize {
        self.spatial_idx
            .nearest_neighbor(&[x, y])
            .map(|e| e.idx as usize)
            .unwrap_or(0) // unreachable: the constructor rejects empty maps
    }

    /// Index of the next waypoint ahead of a vehicle at `(x, y)` facing
    /// `heading` (radians).
    ///
    /// The raw nearest waypoint may sit behind the vehicle; when its bearing
    /// differs from `heading` by more than 90° the index advances by one,
    /// wrapping past the last waypoint back to 0.
    pub fn next_waypoint(&self, x: f64, y: f64, heading: f64) -> usize {
        let closest = self.closest_waypoint(x, y);
        let wp = self.waypoints[closest].position();

        let bearing = CartesianPoint::new(x, y).bearing_to(wp);
        let mut angle = (heading - bearing).abs();
        angle = angle.min(2.0 * std::f64::consts::PI - angle);

        if angle > std::f64::consts::FRAC_PI_2 {
            (closest + 1) % self.waypoints.len()
        } else {
            closest
        }
    }

    // ── Conversions ───────────────────────────────────────────────────────

    /// Convert a world position (with the vehicle's `heading`, radians) to
    /// road-relative coordinates.
    ///
    /// `s` is the accumulated arc length up to the projection of `(x, y)`
    /// onto the segment between the previous and next waypoint; it is
    /// monotone along the direction of travel modulo the wraparound at
    /// `max_s`.  `d` is the perpendicular offset, positive to the right of
    /// travel (signed against the map's lateral reference point).
    pub fn to_frenet(&self, x: f64, y: f64, heading: f64) -> FrenetPoint {
        let next = self.next_waypoint(x, y, heading);
        let prev = if next == 0 { self.waypoints.len() - 1 } else { next - 1 };

        let p = self.waypoints[prev];
        let n = self.waypoints[next];

        // Segment direction and vehicle offset, both relative to `prev`.
        let nx = n.x - p.x;
        let ny = n.y - p.y;
        let vx = x - p.x;
        let vy = y - p.y;

        // Project the vehicle onto the segment.
        let proj_norm = (vx * nx + vy * ny) / (nx * nx + ny * ny);
        let proj_x = proj_norm * nx;
        let proj_y = proj_norm * ny;

        let mut d = (vx - proj_x).hypot(vy - proj_y);

        // Sign: if the vehicle is closer to the left-side reference point
        // than its centerline projection is, it sits left of center.
        let ref_x = self.sign_ref.x - p.x;
        let ref_y = self.sign_ref.y - p.y;
        let ref_to_pos = (ref_x - vx).hypot(ref_y - vy);
        let ref_to_proj = (ref_x - proj_x).hypot(ref_y - proj_y);
        if ref_to_pos <= ref_to_proj {
            d = -d;
        }

        let s = self.arc[prev] + proj_x.hypot(proj_y);

        FrenetPoint::new(s, d)
    }

    /// Convert road-relative coordinates back to a world position.
    ///
    /// Finds the segment whose `s` bracket contains the query (linear scan —
    /// the track has a few hundred waypoints), interpolates the segment
    /// heading, and offsets perpendicular by `d`.  `s` beyond `max_s` wraps
    /// around the loop; the segment after the last waypoint closes back to
    /// waypoint 0.
    pub fn to_cartesian(&self, s: f64, d: f64) -> CartesianPoint {
        let s = s.rem_euclid(self.max_s);

        let mut prev = 0;
        while prev + 1 < self.waypoints.len() && s > self.waypoints[prev + 1].s {
            prev += 1;
        }
        let next = (prev + 1) % self.waypoints.len();

        let p = self.waypoints[prev];
        let n = self.waypoints[next];

        let heading = (n.y - p.y).atan2(n.x - p.x);
        let seg_s = s - p.s;

        let seg_x = p.x + seg_s * heading.cos();
        let seg_y = p.y + seg_s * heading.sin();

        let perp = heading - std::f64::consts::FRAC_PI_2;
        CartesianPoint::new(seg_x + d * perp.cos(), seg_y + d * perp.sin())
    }
}
