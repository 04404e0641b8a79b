//! loop-track — smallest example for the rust_hwp highway planner.
//!
//! Drives the planner around a synthetic 1 km circular track with a handful
//! of slower vehicles sprinkled across the lanes, playing the simulator's
//! role: each tick it consumes a few points off the emitted trajectory,
//! advances the traffic, and feeds the remainder back as the retained tail.
//! Swap in a real waypoint CSV (`load_track_csv`) and a websocket transport
//! to run against a live feed.

use std::f64::consts::PI;
use std::time::Instant;

use anyhow::Result;

use hwp_core::{CartesianPoint, LaneId, Maneuver, PlannerConfig};
use hwp_map::{TrackMap, Waypoint};
use hwp_planner::{Planner, SensorRow, TelemetrySnapshot, plan_cycle};

// ── Constants ─────────────────────────────────────────────────────────────────

const TRACK_RADIUS_M:     f64   = 1_000.0;
const WAYPOINT_COUNT:     usize = 200;
const TICKS:              usize = 1_500;
const CONSUMED_PER_TICK:  usize = 3;
const REPORT_EVERY_TICKS: usize = 100;

/// Slower traffic: `(s, lane, speed m/s)`.
const TRAFFIC: &[(f64, u8, f64)] = &[
    (320.0, 1, 15.0),
    (340.0, 2, 14.0),
    (900.0, 0, 16.0),
    (2_100.0, 1, 13.0),
    (4_500.0, 2, 15.5),
];

// ── Synthetic track ───────────────────────────────────────────────────────────

/// Counterclockwise circle centered at the origin; `d` grows outward.
fn build_track(radius: f64, n: usize) -> Result<TrackMap> {
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

    let map = TrackMap::new(waypoints, max_s)?.with_sign_reference(CartesianPoint::new(0.0, 0.0));
    Ok(map)
}

// ── Traffic playback ──────────────────────────────────────────────────────────

/// Advance every background car one tick along its lane at constant speed.
fn sense_traffic(map: &TrackMap, config: &PlannerConfig, tick: usize) -> Vec<SensorRow> {
    let elapsed = tick as f64 * config.tick_secs;
    TRAFFIC
        .iter()
        .enumerate()
        .map(|(id, &(s0, lane, speed))| {
            let s = (s0 + speed * elapsed).rem_euclid(map.max_s());
            let d = config.lane_center(LaneId(lane));
            let pos = map.to_cartesian(s, d);
            // Heading along the track: approximate the velocity from a short
            // forward step.
            let ahead = map.to_cartesian(s + 0.5, d);
            let heading = (ahead.y - pos.y).atan2(ahead.x - pos.x);
            SensorRow(
                id as u32,
                pos.x,
                pos.y,
                speed * heading.cos(),
                speed * heading.sin(),
                s,
                d,
            )
        })
        .collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== loop-track — rust_hwp highway planner ===");
    println!(
        "Track: {TRACK_RADIUS_M} m radius, {WAYPOINT_COUNT} waypoints  |  Ticks: {TICKS}  |  Cars: {}",
        TRAFFIC.len()
    );
    println!();

    let map = build_track(TRACK_RADIUS_M, WAYPOINT_COUNT)?;
    let config = PlannerConfig { max_s: map.max_s(), ..PlannerConfig::default() };
    let mut planner = Planner::new(build_track(TRACK_RADIUS_M, WAYPOINT_COUNT)?, config.clone());

    // Ego starts at rest in the middle lane at s = 200.
    let mut path: Vec<CartesianPoint> = Vec::new();
    let start = map.to_cartesian(200.0, config.lane_center(LaneId(1)));

    let mut lane_changes = 0usize;
    let mut braking_ticks = 0usize;
    let mut top_speed_mph = 0.0f64;

    let t0 = Instant::now();
    for tick in 0..TICKS {
        let snap = if path.is_empty() {
            TelemetrySnapshot {
                x: start.x,
                y: start.y,
                s: 200.0,
                d: config.lane_center(LaneId(1)),
                yaw: (start.y.atan2(start.x) + PI / 2.0).to_degrees(),
                speed: 0.0,
                previous_path_x: Vec::new(),
                previous_path_y: Vec::new(),
                end_path_s: 0.0,
                end_path_d: 0.0,
                sensor_fusion: sense_traffic(&map, &config, tick),
            }
        } else {
            let pos = path[0];
            let yaw = (path[1].y - pos.y).atan2(path[1].x - pos.x);
            let ego = map.to_frenet(pos.x, pos.y, yaw);

            let last = path[path.len() - 1];
            let prev = path[path.len() - 2];
            let end = map.to_frenet(last.x, last.y, (last.y - prev.y).atan2(last.x - prev.x));

            TelemetrySnapshot {
                x: pos.x,
                y: pos.y,
                s: ego.s,
                d: ego.d,
                yaw: yaw.to_degrees(),
                speed: planner.state().ref_speed_mph,
                previous_path_x: path.iter().map(|p| p.x).collect(),
                previous_path_y: path.iter().map(|p| p.y).collect(),
                end_path_s: end.s,
                end_path_d: end.d,
                sensor_fusion: sense_traffic(&map, &config, tick),
            }
        };

        // Peek at the decision for reporting, then commit through the
        // planner so the carried state advances exactly once.
        let outcome = plan_cycle(&map, &config, &snap, planner.state())?;
        path = planner.plan(&snap)?;

        if outcome.decision.maneuver != Maneuver::KeepLane {
            lane_changes += 1;
        }
        if outcome.decision.too_close {
            braking_ticks += 1;
        }
        top_speed_mph = top_speed_mph.max(outcome.state.ref_speed_mph);

        if tick % REPORT_EVERY_TICKS == 0 {
            println!(
                "tick {tick:>5}  s={:>7.1}  lane={}  maneuver={:<16}  ref={:>5.1} mph  gap={:>7.1}{}",
                snap.s,
                outcome.state.memory.lane.index(),
                outcome.decision.maneuver.to_string(),
                outcome.state.ref_speed_mph,
                outcome.decision.forward_gap,
                if outcome.decision.too_close { "  [braking]" } else { "" },
            );
        }

        path.drain(..CONSUMED_PER_TICK.min(path.len()));
    }
    let elapsed = t0.elapsed();

    println!();
    println!("{TICKS} ticks planned in {:.3} s", elapsed.as_secs_f64());
    println!("  lane changes  : {lane_changes}");
    println!("  braking ticks : {braking_ticks}");
    println!("  top ref speed : {top_speed_mph:.1} mph");

    Ok(())
}
