//! Unit tests for hwp-behavior.

use hwp_core::{CartesianPoint, FrenetPoint, LaneId, Maneuver, PlannerConfig, VehicleId};

use crate::{LaneTraffic, PlannerMemory, VehicleState, decide};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cfg() -> PlannerConfig {
    PlannerConfig::default()
}

/// A neighbor at longitudinal position `s` with lateral offset `d`.
fn car(id: u32, s: f64, d: f64) -> VehicleState {
    VehicleState::new(
        VehicleId(id),
        CartesianPoint::new(0.0, 0.0), // world position is irrelevant to costs
        FrenetPoint::new(s, d),
        20.0,
        &cfg(),
    )
}

/// Ego in the middle lane (d = 6) at `s`.
fn ego_at(s: f64) -> VehicleState {
    car(211, s, 6.0)
}

fn traffic(vehicles: Vec<VehicleState>) -> LaneTraffic {
    LaneTraffic::bucket(vehicles, cfg().lane_count)
}

fn settled_memory() -> PlannerMemory {
    PlannerMemory { lane: LaneId(1), time_in_lane_secs: 60.0 }
}

// ── VehicleState ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod vehicle_state {
    use super::*;

    #[test]
    fn lane_derived_from_lateral_offset() {
        assert_eq!(car(1, 0.0, 2.0).lane, LaneId(0));
        assert_eq!(car(1, 0.0, 6.0).lane, LaneId(1));
        assert_eq!(car(1, 0.0, 10.0).lane, LaneId(2));
    }

    #[test]
    fn successors_from_middle_lane() {
        let ego = ego_at(0.0);
        assert_eq!(
            ego.successors(3),
            vec![Maneuver::KeepLane, Maneuver::LaneChangeLeft, Maneuver::LaneChangeRight],
        );
    }

    #[test]
    fn successors_at_road_edges() {
        assert_eq!(
            car(1, 0.0, 2.0).successors(3),
            vec![Maneuver::KeepLane, Maneuver::LaneChangeRight],
        );
        assert_eq!(
            car(1, 0.0, 10.0).successors(3),
            vec![Maneuver::KeepLane, Maneuver::LaneChangeLeft],
        );
    }

    #[test]
    fn lane_change_commits_for_one_tick() {
        let mut ego = ego_at(0.0);
        ego.maneuver = Maneuver::LaneChangeLeft;
        assert_eq!(ego.successors(3), vec![Maneuver::KeepLane]);
    }
}

// ── LaneTraffic ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod lane_traffic {
    use super::*;

    #[test]
    fn buckets_by_derived_lane() {
        let t = traffic(vec![car(1, 100.0, 2.0), car(2, 120.0, 6.5), car(3, 90.0, 9.0)]);
        assert_eq!(t.lane(LaneId(0)).len(), 1);
        assert_eq!(t.lane(LaneId(1)).len(), 1);
        assert_eq!(t.lane(LaneId(2)).len(), 1);
        assert_eq!(t.lane(LaneId(1))[0].id, VehicleId(2));
    }

    #[test]
    fn gaps_pick_nearest_each_direction() {
        let t = traffic(vec![
            car(1, 530.0, 6.0), // ahead by 30
            car(2, 512.0, 6.0), // ahead by 12 — closest ahead
            car(3, 480.0, 6.0), // behind by 20
            car(4, 495.0, 6.0), // behind by 5 — closest behind
        ]);
        let gaps = t.gaps(LaneId(1), 500.0, 9_999.0);
        assert!((gaps.ahead - 12.0).abs() < 1e-12);
        assert!((gaps.behind - 5.0).abs() < 1e-12);
    }

    #[test]
    fn empty_directions_report_the_sentinel() {
        let t = traffic(vec![car(1, 510.0, 6.0)]);
        let gaps = t.gaps(LaneId(1), 500.0, 9_999.0);
        assert!((gaps.ahead - 10.0).abs() < 1e-12);
        assert!((gaps.behind - 9_999.0).abs() < 1e-12);

        let empty = t.gaps(LaneId(0), 500.0, 9_999.0);
        assert!((empty.ahead - 9_999.0).abs() < 1e-12);
    }

    #[test]
    fn level_vehicle_counts_as_ahead_and_clamps() {
        let t = traffic(vec![car(1, 500.0, 6.0)]);
        let gaps = t.gaps(LaneId(1), 500.0, 9_999.0);
        assert_eq!(gaps.ahead, 0.0);
        let clamped = gaps.clamped(1e-3);
        assert_eq!(clamped.ahead, 1e-3);
    }
}

// ── PlannerMemory ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner_memory {
    use super::*;

    #[test]
    fn same_lane_accumulates() {
        let mut m = PlannerMemory::starting_in(LaneId(1), 0.01);
        m.observe(LaneId(1), 0.02, 0.01);
        m.observe(LaneId(1), 0.02, 0.01);
        assert!((m.time_in_lane_secs - 0.05).abs() < 1e-12);
    }

    #[test]
    fn lane_change_resets_to_floor() {
        let mut m = PlannerMemory { lane: LaneId(1), time_in_lane_secs: 12.0 };
        m.observe(LaneId(0), 0.02, 0.01);
        assert_eq!(m.lane, LaneId(0));
        assert!((m.time_in_lane_secs - 0.01).abs() < 1e-12);
    }
}

// ── decide ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod decision {
    use super::*;

    /// Park close traffic front and back in `lane` so changing into it is
    /// always a terrible idea.
    fn wall(next_id: u32, lane_d: f64, ego_s: f64) -> Vec<VehicleState> {
        vec![car(next_id, ego_s + 2.0, lane_d), car(next_id + 1, ego_s - 2.0, lane_d)]
    }

    #[test]
    fn empty_road_keeps_lane_at_zero_cost() {
        let d = decide(&ego_at(500.0), &traffic(vec![]), &settled_memory(), &cfg());
        assert_eq!(d.maneuver, Maneuver::KeepLane);
        assert_eq!(d.target_lane, LaneId(1));
        assert_eq!(d.cost, 0.0);
        assert!(!d.too_close);
    }

    #[test]
    fn smaller_forward_gap_costs_strictly_more() {
        // Walls left and right leave keep-lane as the only sane candidate,
        // so the decision cost is the keep-lane gap cost.
        let cost_with_gap = |gap: f64| {
            let mut vehicles = wall(10, 2.0, 500.0);
            vehicles.extend(wall(20, 10.0, 500.0));
            vehicles.push(car(1, 500.0 + gap, 6.0));
            decide(&ego_at(500.0), &traffic(vehicles), &settled_memory(), &cfg()).cost
        };
        assert!(cost_with_gap(10.0) > cost_with_gap(20.0));
    }

    #[test]
    fn blocked_lane_triggers_a_change() {
        // One car 10 units ahead in ego's lane, both adjacent
        // lanes empty.  Keep-lane costs 60/10 = 6; either change costs 0;
        // the left candidate is evaluated first and wins the tie.
        let d = decide(
            &ego_at(500.0),
            &traffic(vec![car(1, 510.0, 6.0)]),
            &settled_memory(),
            &cfg(),
        );
        assert_eq!(d.maneuver, Maneuver::LaneChangeLeft);
        assert_eq!(d.target_lane, LaneId(0));
        assert_eq!(d.cost, 0.0);
        // The chosen (empty) lane has sentinel clearance — no brake needed.
        assert!(!d.too_close);
    }

    #[test]
    fn too_close_asserted_when_chosen_gap_is_short() {
        // Every lane blocked; the best option still has under 30 units of
        // clearance, so the brake flag must come up.
        let mut vehicles = wall(10, 2.0, 500.0);
        vehicles.extend(wall(20, 10.0, 500.0));
        vehicles.push(car(1, 520.0, 6.0));
        let d = decide(&ego_at(500.0), &traffic(vehicles), &settled_memory(), &cfg());
        assert_eq!(d.maneuver, Maneuver::KeepLane);
        assert!((d.forward_gap - 20.0).abs() < 1e-12);
        assert!(d.too_close);
    }

    #[test]
    fn recent_change_makes_another_change_dearer() {
        // Keep-lane is terrible (car nearly touching); the left lane has a
        // car far ahead so its cost is dominated by the recency penalty.
        let vehicles = || {
            let mut v = vec![car(1, 500.1, 6.0), car(2, 1_400.0, 2.0)];
            v.extend(wall(20, 10.0, 500.0));
            v
        };
        let fresh = PlannerMemory { lane: LaneId(1), time_in_lane_secs: 0.01 };
        let d_fresh = decide(&ego_at(500.0), &traffic(vehicles()), &fresh, &cfg());
        let d_settled = decide(&ego_at(500.0), &traffic(vehicles()), &settled_memory(), &cfg());

        assert_eq!(d_fresh.maneuver, Maneuver::LaneChangeLeft);
        assert_eq!(d_settled.maneuver, Maneuver::LaneChangeLeft);
        assert!(d_fresh.cost > d_settled.cost);
    }

    #[test]
    fn tie_breaks_toward_earlier_candidate() {
        // Both adjacent lanes empty and ego's lane empty too: three zero
        // costs, keep-lane listed first, keep-lane wins.
        let d = decide(&ego_at(500.0), &traffic(vec![]), &settled_memory(), &cfg());
        assert_eq!(d.maneuver, Maneuver::KeepLane);
    }
}
