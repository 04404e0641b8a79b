//! The per-tick trajectory resampling walk.

use hwp_core::{CartesianPoint, LaneId, PlannerConfig};
use hwp_map::TrackMap;

use crate::{Spline, TrajectoryResult, anchors::build_anchors};

/// Everything one trajectory synthesis needs from the current cycle.
#[derive(Debug)]
pub struct TrajectoryRequest<'a> {
    /// Ego world position from the snapshot.
    pub ego_position: CartesianPoint,
    /// Ego heading, radians.
    pub ego_yaw: f64,
    /// Longitudinal position the forward anchors are measured from: the end
    /// of the previous path when a tail exists, raw ego `s` otherwise.
    pub plan_from_s: f64,
    /// Unconsumed points of the previously emitted trajectory, in order.
    pub previous_tail: &'a [CartesianPoint],
    /// Lane the behavior planner selected this tick.
    pub target_lane: LaneId,
    /// Reference speed (mph) after this tick's ramp step.
    pub ref_speed_mph: f64,
}

/// Synthesize the next trajectory: the retained tail verbatim, then newly
/// resampled points up to the configured horizon.
///
/// New points walk the fitted spline in even x steps in the vehicle frame.
/// The step size divides the chord to the forward `anchor_spacing` offset
/// into segments one tick long at the reference speed, which is what bounds
/// per-tick acceleration: the spacing of emitted points only changes as
/// fast as the speed ramp does.
pub fn generate(
    map: &TrackMap,
    config: &PlannerConfig,
    req: &TrajectoryRequest<'_>,
) -> TrajectoryResult<Vec<CartesianPoint>> {
    let anchors = build_anchors(
        map,
        config,
        req.ego_position,
        req.ego_yaw,
        req.plan_from_s,
        req.previous_tail,
        req.target_lane,
    );
    let spline = Spline::fit(&anchors.xs, &anchors.ys)?;

    let mut path: Vec<CartesianPoint> = req
        .previous_tail
        .iter()
        .copied()
        .take(config.horizon)
        .collect();

    // Chord to the forward pacing offset, and how many tick-length segments
    // cover it at the reference speed (floored so zero speed can't divide
    // the chord into zero segments).
    let target_x = config.anchor_spacing;
    let target_y = spline.eval(target_x);
    let chord = target_x.hypot(target_y);

    let speed_mps = req.ref_speed_mph.max(config.pacing_floor_mph) / config.mph_to_mps;
    let segments = chord / (config.tick_secs * speed_mps);
    let step = target_x / segments;

    let mut x = 0.0;
    while path.len() < config.horizon {
        x += step;
        let local = CartesianPoint::new(x, spline.eval(x));
        path.push(anchors.frame.to_world(local));
    }

    Ok(path)
}
