//! Per-snapshot description of one traffic participant.

use hwp_core::{CartesianPoint, FrenetPoint, LaneId, Maneuver, PlannerConfig, VehicleId};

/// One vehicle (ego or sensed neighbor) as of a single telemetry snapshot.
///
/// Built fresh every tick and discarded at tick end — the only state that
/// survives a cycle lives in [`PlannerMemory`][crate::PlannerMemory].
/// `lane` is derived from `d` and the lane geometry at construction, never
/// set independently.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleState {
    pub id: VehicleId,
    pub position: CartesianPoint,
    pub frenet: FrenetPoint,
    /// Speed as reported by the feed (mph for ego, sensor magnitude for
    /// neighbors).  The decision step never compares the two directly.
    pub speed: f64,
    pub lane: LaneId,
    pub maneuver: Maneuver,
}

impl VehicleState {
    /// Build a vehicle state from raw snapshot fields, deriving its lane.
    pub fn new(
        id: VehicleId,
        position: CartesianPoint,
        frenet: FrenetPoint,
        speed: f64,
        config: &PlannerConfig,
    ) -> Self {
        Self {
            id,
            position,
            frenet,
            speed,
            lane: LaneId::from_lateral(frenet.d, config.lane_width, config.lane_count),
            maneuver: Maneuver::KeepLane,
        }
    }

    /// The maneuvers reachable from the current one, in evaluation order.
    ///
    /// From `KeepLane`: keep, change left (unless in lane 0), change right
    /// (unless in the last lane).  From either change state the only
    /// successor is `KeepLane` — a lane change is a one-tick commitment
    /// re-evaluated from level ground the next cycle.  Evaluation order is
    /// load-bearing: cost ties are broken by the earlier-listed candidate.
    pub fn successors(&self, lane_count: u8) -> Vec<Maneuver> {
        let mut states = vec![Maneuver::KeepLane];
        if self.maneuver == Maneuver::KeepLane {
            if self.lane.left().is_some() {
                states.push(Maneuver::LaneChangeLeft);
            }
            if self.lane.right(lane_count).is_some() {
                states.push(Maneuver::LaneChangeRight);
            }
        }
        states
    }
}
