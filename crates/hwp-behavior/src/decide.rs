//! Candidate evaluation and maneuver selection.

use hwp_core::{LaneId, Maneuver, PlannerConfig};

use crate::{LaneTraffic, PlannerMemory, VehicleState};

/// The outcome of one decision step.
///
/// Carries everything the trajectory generator and the cycle driver need —
/// the decision step itself mutates nothing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decision {
    pub maneuver: Maneuver,
    /// The lane the trajectory should steer into.
    pub target_lane: LaneId,
    /// Forward clearance in the target lane (sentinel when it is empty).
    pub forward_gap: f64,
    /// True when `forward_gap` is under the too-close threshold — the
    /// reference speed should ramp down this tick.
    pub too_close: bool,
    /// The winning candidate's cost, for logging and tests.
    pub cost: f64,
}

/// Evaluate every reachable maneuver and pick the cheapest.
///
/// Candidates are scored by [`maneuver_cost`] in the order
/// [`VehicleState::successors`] lists them; a strict `<` comparison means
/// ties go to the earlier-listed candidate (keep-lane first).
pub fn decide(
    ego: &VehicleState,
    traffic: &LaneTraffic,
    memory: &PlannerMemory,
    config: &PlannerConfig,
) -> Decision {
    let mut best: Option<Decision> = None;

    for maneuver in ego.successors(config.lane_count) {
        let Some(target_lane) = target_lane(maneuver, ego.lane, config.lane_count) else {
            continue; // successors() already filtered these; belt and braces
        };
        let (cost, forward_gap) = maneuver_cost(maneuver, target_lane, ego, traffic, memory, config);

        let candidate = Decision {
            maneuver,
            target_lane,
            forward_gap,
            too_close: forward_gap < config.too_close_gap,
            cost,
        };
        match &best {
            Some(b) if candidate.cost >= b.cost => {}
            _ => best = Some(candidate),
        }
    }

    // successors() always contains KeepLane, so `best` is always set.
    best.unwrap_or(Decision {
        maneuver: Maneuver::KeepLane,
        target_lane: ego.lane,
        forward_gap: config.gap_sentinel,
        too_close: false,
        cost: 0.0,
    })
}

/// The lane `maneuver` would put ego in.
fn target_lane(maneuver: Maneuver, lane: LaneId, lane_count: u8) -> Option<LaneId> {
    match maneuver {
        Maneuver::KeepLane        => Some(lane),
        Maneuver::LaneChangeLeft  => lane.left(),
        Maneuver::LaneChangeRight => lane.right(lane_count),
    }
}

/// Score one candidate; returns `(cost, forward_gap)`.
///
/// An empty target lane costs nothing.  Otherwise the cost is the inverse
/// forward clearance (keep-lane), plus for lane changes the inverse backward
/// clearance and a recency penalty that decays as time-in-lane accumulates.
/// Gaps are floor-clamped before inversion so a zero delta cannot blow up.
fn maneuver_cost(
    maneuver: Maneuver,
    target_lane: LaneId,
    ego: &VehicleState,
    traffic: &LaneTraffic,
    memory: &PlannerMemory,
    config: &PlannerConfig,
) -> (f64, f64) {
    if traffic.is_lane_empty(target_lane) {
        return (0.0, config.gap_sentinel);
    }

    let gaps = traffic
        .gaps(target_lane, ego.frenet.s, config.gap_sentinel)
        .clamped(config.gap_epsilon);

    let cost = match maneuver {
        Maneuver::KeepLane => config.keep_weight / gaps.ahead,
        Maneuver::LaneChangeLeft | Maneuver::LaneChangeRight => {
            config.change_weight / gaps.ahead
                + config.change_weight / gaps.behind
                + config.switch_penalty / memory.time_in_lane_secs
        }
    };

    (cost, gaps.ahead)
}
