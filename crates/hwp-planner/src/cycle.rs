//! One pure planning cycle: snapshot plus carried state in, trajectory plus
//! updated state out.

use hwp_behavior::{Decision, LaneTraffic, PlannerMemory, VehicleState, decide};
use hwp_core::{CartesianPoint, FrenetPoint, LaneId, PlannerConfig, VehicleId};
use hwp_map::TrackMap;
use hwp_trajectory::{TrajectoryRequest, generate, ramp_reference_speed};

use crate::{PlanResult, TelemetrySnapshot};

/// The only values that survive a planning cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CycleState {
    pub memory: PlannerMemory,
    /// Reference speed (mph) the last emitted trajectory was paced at.
    pub ref_speed_mph: f64,
}

impl CycleState {
    /// Startup state: standing still in the middle lane.
    pub fn startup(config: &PlannerConfig) -> Self {
        let lane = LaneId(config.lane_count / 2);
        Self {
            memory: PlannerMemory::starting_in(lane, config.lane_time_floor),
            ref_speed_mph: 0.0,
        }
    }
}

/// Everything one cycle produced.
#[derive(Clone, Debug)]
pub struct CycleOutcome {
    pub trajectory: Vec<CartesianPoint>,
    pub decision: Decision,
    /// The carried state after this cycle, to be threaded into the next.
    pub state: CycleState,
}

/// Run one full planning cycle against a snapshot.
///
/// The sequence is fixed: rebuild ego and fold its measured lane into the
/// recency memory, bucket the sensed vehicles, pick the cheapest maneuver,
/// step the reference speed, then synthesize the trajectory toward the
/// chosen lane.  The caller's state is taken by value and the updated copy
/// handed back in the outcome, so a failed cycle leaves the caller's state
/// untouched.
pub fn plan_cycle(
    map: &TrackMap,
    config: &PlannerConfig,
    snapshot: &TelemetrySnapshot,
    mut state: CycleState,
) -> PlanResult<CycleOutcome> {
    let ego = VehicleState::new(
        VehicleId(0),
        CartesianPoint::new(snapshot.x, snapshot.y),
        FrenetPoint::new(snapshot.s, snapshot.d),
        snapshot.speed,
        config,
    );
    state.memory.observe(ego.lane, config.tick_secs, config.lane_time_floor);

    let others = snapshot.sensor_fusion.iter().map(|row| {
        VehicleState::new(
            VehicleId(row.id()),
            row.position(),
            row.frenet(),
            row.speed(),
            config,
        )
    });
    let traffic = LaneTraffic::bucket(others, config.lane_count);

    let decision = decide(&ego, &traffic, &state.memory, config);
    state.ref_speed_mph = ramp_reference_speed(state.ref_speed_mph, decision.too_close, config);

    let previous_tail = snapshot.previous_tail();
    // Forward anchors start where the retained tail ends; with no tail they
    // start at ego's own track position.
    let plan_from_s = if previous_tail.is_empty() { snapshot.s } else { snapshot.end_path_s };

    let request = TrajectoryRequest {
        ego_position: ego.position,
        ego_yaw: snapshot.yaw.to_radians(),
        plan_from_s,
        previous_tail: &previous_tail,
        target_lane: decision.target_lane,
        ref_speed_mph: state.ref_speed_mph,
    };
    let trajectory = generate(map, config, &request)?;

    Ok(CycleOutcome { trajectory, decision, state })
}
