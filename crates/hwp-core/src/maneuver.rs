//! The driving maneuvers the decision FSM chooses between.

use std::fmt;

/// One candidate driving state for the next planning horizon.
///
/// `KeepLane` is the initial and default state.  A lane change is a one-tick
/// commitment: from either change state the only reachable successor is
/// `KeepLane`, so the planner re-evaluates from level ground on the very
/// next cycle.  Successor enumeration lives in `hwp-behavior`, which knows
/// the lane geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maneuver {
    #[default]
    KeepLane,
    LaneChangeLeft,
    LaneChangeRight,
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Maneuver::KeepLane        => "keep lane",
            Maneuver::LaneChangeLeft  => "lane change left",
            Maneuver::LaneChangeRight => "lane change right",
        };
        f.write_str(name)
    }
}
