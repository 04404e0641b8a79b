//! Anchor construction for the spline fit.

use hwp_core::{CartesianPoint, LaneId, PlannerConfig};
use hwp_map::TrackMap;

use crate::RefFrame;

/// The five spline anchors in the vehicle reference frame, plus the frame
/// itself for mapping resampled points back to world coordinates.
pub struct AnchorSet {
    pub frame: RefFrame,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Build the anchor set for one planning cycle.
///
/// Continuity anchors: the last two points of the previous trajectory's
/// unconsumed tail.  With fewer than two points left (startup, or the
/// simulator swallowed the whole path) two points tangent to ego's current
/// heading are synthesized instead — never an error.
///
/// Forward anchors: `anchor_count` points at `anchor_spacing` increments of
/// `s` beyond `plan_from_s`, at the target lane's center offset, converted
/// through the map.  All five are then rotated into the frame of the second
/// continuity anchor so the fit sees strictly increasing x.
pub fn build_anchors(
    map: &TrackMap,
    config: &PlannerConfig,
    ego_position: CartesianPoint,
    ego_yaw: f64,
    plan_from_s: f64,
    previous_tail: &[CartesianPoint],
    target_lane: LaneId,
) -> AnchorSet {
    let (prev_pt, ref_pt, ref_yaw) = match previous_tail {
        [.., a, b] => (*a, *b, a.bearing_to(*b)),
        _ => {
            let behind = CartesianPoint::new(
                ego_position.x - ego_yaw.cos(),
                ego_position.y - ego_yaw.sin(),
            );
            (behind, ego_position, ego_yaw)
        }
    };

    let frame = RefFrame::new(ref_pt, ref_yaw);
    let lane_d = config.lane_center(target_lane);

    let mut anchors = Vec::with_capacity(2 + config.anchor_count);
    anchors.push(prev_pt);
    anchors.push(ref_pt);
    for k in 1..=config.anchor_count {
        anchors.push(map.to_cartesian(plan_from_s + config.anchor_spacing * k as f64, lane_d));
    }

    let mut xs = Vec::with_capacity(anchors.len());
    let mut ys = Vec::with_capacity(anchors.len());
    for p in anchors {
        let local = frame.to_local(p);
        xs.push(local.x);
        ys.push(local.y);
    }

    AnchorSet { frame, xs, ys }
}
