//! Unit tests for hwp-trajectory.

use std::f64::consts::{FRAC_PI_2, PI};

use hwp_core::{CartesianPoint, LaneId, PlannerConfig};
use hwp_map::{TrackMap, Waypoint};

use crate::{RefFrame, Spline, TrajectoryRequest, generate, ramp_reference_speed};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cfg() -> PlannerConfig {
    PlannerConfig::default()
}

/// Counterclockwise circular track centered at the origin, positive `d`
/// pointing outward (right of travel).
fn circle_track(radius: f64, n: usize) -> TrackMap {
    let mut waypoints: Vec<Waypoint> = Vec::with_capacity(n);
    let mut s = 0.0;
    for i in 0..n {
        let theta = 2.0 * PI * i as f64 / n as f64;
        let x = radius * theta.cos();
        let y = radius * theta.sin();
        if let Some(prev) = waypoints.last() {
            s += prev.position().distance(CartesianPoint::new(x, y));
        }
        waypoints.push(Waypoint { x, y, s, dx: theta.cos(), dy: theta.sin() });
    }
    let closing = waypoints[n - 1].position().distance(waypoints[0].position());
    let max_s = s + closing;

    TrackMap::new(waypoints, max_s)
        .unwrap()
        .with_sign_reference(CartesianPoint::new(0.0, 0.0))
}

/// An ego request in lane 1 at `s = 200` with no previous tail.
fn fresh_request(map: &TrackMap, target_lane: LaneId, ref_speed_mph: f64) -> TrajectoryRequest<'static> {
    let pos = map.to_cartesian(200.0, 6.0);
    let yaw = pos.y.atan2(pos.x) + FRAC_PI_2; // CCW tangent
    TrajectoryRequest {
        ego_position: pos,
        ego_yaw: yaw,
        plan_from_s: 200.0,
        previous_tail: &[],
        target_lane,
        ref_speed_mph,
    }
}

// ── Spline ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spline {
    use super::*;
    use crate::TrajectoryError;

    #[test]
    fn passes_through_every_knot() {
        let x = [0.0, 1.0, 2.5, 3.0, 4.0];
        let y = [0.0, 1.0, -0.5, 1.5, 0.0];
        let sp = Spline::fit(&x, &y).unwrap();
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert!((sp.eval(*xi) - yi).abs() < 1e-9, "knot {xi}");
        }
    }

    #[test]
    fn reproduces_a_line_exactly() {
        let x = [0.0, 10.0, 20.0, 30.0];
        let y: Vec<f64> = x.iter().map(|xi| 2.0 * xi + 1.0).collect();
        let sp = Spline::fit(&x, &y).unwrap();
        assert!((sp.eval(15.0) - 31.0).abs() < 1e-9);
        assert!((sp.deriv(5.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn first_derivative_continuous_at_knots() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 1.0, 0.0, 1.0, 0.0];
        let sp = Spline::fit(&x, &y).unwrap();
        for knot in [1.0, 2.0, 3.0] {
            let left = sp.deriv(knot - 1e-7);
            let right = sp.deriv(knot + 1e-7);
            assert!((left - right).abs() < 1e-4, "kink at {knot}");
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Spline::fit(&[0.0, 1.0], &[0.0, 1.0]),
            Err(TrajectoryError::TooFewAnchors { .. })
        ));
        assert!(matches!(
            Spline::fit(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]),
            Err(TrajectoryError::NonIncreasingX)
        ));
    }
}

// ── RefFrame ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame {
    use super::*;

    #[test]
    fn world_local_round_trip() {
        let frame = RefFrame::new(CartesianPoint::new(12.5, -3.0), 0.7);
        for p in [
            CartesianPoint::new(0.0, 0.0),
            CartesianPoint::new(100.0, 50.0),
            CartesianPoint::new(-7.0, 13.0),
        ] {
            let back = frame.to_world(frame.to_local(p));
            assert!(back.distance(p) < 1e-9);
        }
    }

    #[test]
    fn point_ahead_lands_on_positive_x_axis() {
        let origin = CartesianPoint::new(5.0, 5.0);
        let frame = RefFrame::new(origin, FRAC_PI_2); // facing north
        let ahead = CartesianPoint::new(5.0, 8.0);
        let local = frame.to_local(ahead);
        assert!((local.x - 3.0).abs() < 1e-9);
        assert!(local.y.abs() < 1e-9);
    }
}

// ── Speed ramp ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod speed {
    use super::*;

    #[test]
    fn ramps_up_by_one_step() {
        let c = cfg();
        let next = ramp_reference_speed(20.0, false, &c);
        assert!((next - 20.224).abs() < 1e-12);
    }

    #[test]
    fn saturates_at_the_ceiling() {
        let c = cfg();
        let next = ramp_reference_speed(49.4, false, &c);
        assert!((next - 49.5).abs() < 1e-12);
        assert!((ramp_reference_speed(49.5, false, &c) - 49.5).abs() < 1e-12);
    }

    #[test]
    fn brakes_harder_than_it_accelerates() {
        let c = cfg();
        let next = ramp_reference_speed(20.0, true, &c);
        assert!((next - (20.0 - 0.224 * 1.5)).abs() < 1e-12);
    }

    #[test]
    fn never_drops_below_zero() {
        let c = cfg();
        assert_eq!(ramp_reference_speed(0.1, true, &c), 0.0);
        assert_eq!(ramp_reference_speed(0.0, true, &c), 0.0);
    }

    #[test]
    fn per_tick_delta_is_bounded() {
        let c = cfg();
        let bound = c.accel_step_mph * c.brake_factor + 1e-12;
        for v in [0.0, 1.0, 25.0, 49.4, 49.5] {
            for too_close in [false, true] {
                let next = ramp_reference_speed(v, too_close, &c);
                assert!((next - v).abs() <= bound, "v={v} too_close={too_close}");
            }
        }
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;

    #[test]
    fn fills_the_horizon_from_an_empty_tail() {
        let map = circle_track(1_000.0, 200);
        let req = fresh_request(&map, LaneId(1), 49.5);
        let path = generate(&map, &cfg(), &req).unwrap();
        assert_eq!(path.len(), 50);
        assert!(path.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn retains_the_previous_tail_verbatim() {
        let map = circle_track(1_000.0, 200);
        let first = generate(&map, &cfg(), &fresh_request(&map, LaneId(1), 49.5)).unwrap();

        // Simulator consumed 10 points; the remaining 40 come back as tail.
        let tail: Vec<CartesianPoint> = first[10..].to_vec();
        let pos = tail[0];
        let req = TrajectoryRequest {
            ego_position: pos,
            ego_yaw: pos.y.atan2(pos.x) + FRAC_PI_2,
            plan_from_s: 230.0,
            previous_tail: &tail,
            target_lane: LaneId(1),
            ref_speed_mph: 49.5,
        };
        let second = generate(&map, &cfg(), &req).unwrap();

        assert_eq!(second.len(), 50);
        for (i, p) in tail.iter().enumerate() {
            assert!(second[i].distance(*p) < 1e-12, "tail point {i} changed");
        }
    }

    #[test]
    fn paces_points_at_the_reference_speed() {
        let map = circle_track(1_000.0, 200);
        let c = cfg();
        let req = fresh_request(&map, LaneId(1), 49.5);
        let path = generate(&map, &c, &req).unwrap();

        // One tick at 49.5 mph ≈ 0.442 m.  The curve is gentle, so chord
        // and arc agree to well under 5 %.
        let expected = c.tick_secs * 49.5 / c.mph_to_mps;
        for pair in path.windows(2).skip(1) {
            let spacing = pair[0].distance(pair[1]);
            assert!(
                (spacing - expected).abs() < expected * 0.05,
                "spacing {spacing} vs {expected}"
            );
        }
    }

    #[test]
    fn keeping_lane_holds_the_lane_radius() {
        let map = circle_track(1_000.0, 200);
        let req = fresh_request(&map, LaneId(1), 49.5);
        let path = generate(&map, &cfg(), &req).unwrap();
        // Lane 1 center sits 6 m outside the 1 km centerline.
        for p in &path {
            let r = p.x.hypot(p.y);
            assert!((r - 1_006.0).abs() < 0.5, "radius {r}");
        }
    }

    #[test]
    fn lane_change_bends_toward_the_target_lane() {
        let map = circle_track(1_000.0, 200);
        let req = fresh_request(&map, LaneId(0), 49.5);
        let path = generate(&map, &cfg(), &req).unwrap();

        let first_r = path[0].x.hypot(path[0].y);
        let last_r = path[49].x.hypot(path[49].y);
        // Ego starts in lane 1 (r ≈ 1006); lane 0 center is r ≈ 1002.  The
        // horizon covers ~22 m of a 30 m transition, so the path must have
        // moved well inward without necessarily finishing the change.
        assert!(first_r > 1_005.0, "start radius {first_r}");
        assert!(last_r < 1_004.5, "end radius {last_r}");
        assert!(last_r > 1_001.0, "overshot the target lane: {last_r}");
    }

    #[test]
    fn zero_reference_speed_still_produces_a_full_path() {
        let map = circle_track(1_000.0, 200);
        let req = fresh_request(&map, LaneId(1), 0.0);
        let path = generate(&map, &cfg(), &req).unwrap();
        assert_eq!(path.len(), 50);
        // Paced at the floor speed: points crawl but never collapse onto
        // each other or shoot to infinity.
        for pair in path.windows(2) {
            let spacing = pair[0].distance(pair[1]);
            assert!(spacing.is_finite() && spacing < 0.01);
        }
    }
}
