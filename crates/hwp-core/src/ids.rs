//! Strongly typed identifier wrappers.
//!
//! `VehicleId` wraps the sensor-fusion track id so telemetry rows and lane
//! buckets can't be confused with raw indices.  `LaneId` wraps a lane index
//! and carries the left/right neighbor arithmetic the decision FSM needs —
//! reachable-state checks live here instead of being scattered as
//! `lane > 0` / `lane < count - 1` comparisons.

use std::fmt;

/// Sensor-fusion track identifier of one vehicle (ego included).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

/// Zero-based lane index, counted from the road median outward.
///
/// Lane 0 is the leftmost legal lane; `count - 1` the rightmost.  `u8` is
/// plenty — no highway has 256 lanes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneId(pub u8);

impl LaneId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The lane to the left, or `None` when already in lane 0.
    #[inline]
    pub fn left(self) -> Option<LaneId> {
        self.0.checked_sub(1).map(LaneId)
    }

    /// The lane to the right, or `None` when already in the last of
    /// `lane_count` lanes.
    #[inline]
    pub fn right(self, lane_count: u8) -> Option<LaneId> {
        if self.0 + 1 < lane_count {
            Some(LaneId(self.0 + 1))
        } else {
            None
        }
    }

    /// Derive the lane from a lateral Frenet offset.
    ///
    /// Out-of-range `d` (off-road readings happen mid-lane-change and at the
    /// track seam) clamps to the nearest legal lane rather than failing.
    pub fn from_lateral(d: f64, lane_width: f64, lane_count: u8) -> LaneId {
        let raw = (d / lane_width).floor();
        LaneId(raw.clamp(0.0, f64::from(lane_count - 1)) as u8)
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lane {}", self.0)
    }
}
