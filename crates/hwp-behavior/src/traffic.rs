//! Per-lane traffic buckets and nearest-gap search.

use hwp_core::LaneId;

use crate::VehicleState;

/// Forward and backward clearance from ego to the nearest vehicles in one
/// lane, in track distance units.
///
/// Directions with no vehicle carry the configured sentinel (effectively
/// infinitely far).  Both values are non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaneGaps {
    /// Smallest non-negative `s` delta to a vehicle ahead.
    pub ahead: f64,
    /// Smallest magnitude of a negative `s` delta to a vehicle behind.
    pub behind: f64,
}

impl LaneGaps {
    /// Floor both gaps so downstream cost inversion cannot divide by zero —
    /// a vehicle exactly alongside ego reports a zero `s` delta.
    #[inline]
    pub fn clamped(self, epsilon: f64) -> LaneGaps {
        LaneGaps {
            ahead: self.ahead.max(epsilon),
            behind: self.behind.max(epsilon),
        }
    }
}

/// All sensed vehicles partitioned by the lane they currently occupy.
pub struct LaneTraffic {
    lanes: Vec<Vec<VehicleState>>,
}

impl LaneTraffic {
    /// Bucket `vehicles` into `lane_count` lanes by their derived lane.
    ///
    /// Off-road `d` readings were already clamped into the legal range when
    /// each `VehicleState` derived its lane, so every vehicle lands in a
    /// bucket.
    pub fn bucket(vehicles: impl IntoIterator<Item = VehicleState>, lane_count: u8) -> Self {
        let mut lanes: Vec<Vec<VehicleState>> = (0..lane_count).map(|_| Vec::new()).collect();
        for v in vehicles {
            lanes[v.lane.index()].push(v);
        }
        Self { lanes }
    }

    /// Vehicles currently in `lane`.
    #[inline]
    pub fn lane(&self, lane: LaneId) -> &[VehicleState] {
        &self.lanes[lane.index()]
    }

    #[inline]
    pub fn is_lane_empty(&self, lane: LaneId) -> bool {
        self.lanes[lane.index()].is_empty()
    }

    /// Nearest forward and backward clearance in `lane`, seen from `ego_s`.
    ///
    /// A vehicle dead level with ego (zero delta) counts as ahead, matching
    /// the half-open split `delta >= 0` / `delta < 0`.
    pub fn gaps(&self, lane: LaneId, ego_s: f64, sentinel: f64) -> LaneGaps {
        let mut gaps = LaneGaps { ahead: sentinel, behind: sentinel };
        for car in self.lane(lane) {
            let delta = car.frenet.s - ego_s;
            if delta >= 0.0 && delta < gaps.ahead {
                gaps.ahead = delta;
            } else if delta < 0.0 && delta.abs() < gaps.behind {
                gaps.behind = delta.abs();
            }
        }
        gaps
    }
}
