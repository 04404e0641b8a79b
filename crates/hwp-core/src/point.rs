//! Cartesian and road-relative (Frenet) coordinate types.
//!
//! Both are plain `f64` pairs.  The planner works at a few-kilometre scale
//! where `f64` keeps sub-millimetre precision; the map sampling error
//! (waypoints every ~30 m) dwarfs floating-point rounding everywhere.

use std::fmt;

/// A world-frame position in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
}

impl CartesianPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: CartesianPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bearing of `other` as seen from `self`, in radians.
    #[inline]
    pub fn bearing_to(self, other: CartesianPoint) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A road-relative position: longitudinal arc length `s` along the track
/// centerline and signed lateral offset `d` from it.
///
/// `d` grows to the right of the direction of travel; lane centers sit at
/// `lane_width / 2 + lane_width * lane`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrenetPoint {
    pub s: f64,
    pub d: f64,
}

impl FrenetPoint {
    #[inline]
    pub fn new(s: f64, d: f64) -> Self {
        Self { s, d }
    }
}

impl fmt::Display for FrenetPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(s {:.3}, d {:.3})", self.s, self.d)
    }
}
