//! The lane-recency memory carried across ticks.

use hwp_core::LaneId;

/// How long ego has continuously held its lane.
///
/// This is one of only two values that survive a planning cycle (the other
/// is the reference speed).  It is threaded through each cycle explicitly —
/// passed in, updated, handed back — so the decision step stays a pure
/// function of its arguments.
///
/// The lane-change cost includes `switch_penalty / time_in_lane_secs`:
/// immediately after a change the clock sits at its floor and the penalty is
/// maximal, which is what discourages oscillating straight back.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerMemory {
    /// The lane ego was last observed in.
    pub lane: LaneId,
    /// Seconds ego has continuously occupied `lane`.
    pub time_in_lane_secs: f64,
}

impl PlannerMemory {
    /// Fresh memory for a vehicle starting in `lane`, with the clock at its
    /// floor as if the lane had just been entered.
    pub fn starting_in(lane: LaneId, lane_time_floor: f64) -> Self {
        Self { lane, time_in_lane_secs: lane_time_floor }
    }

    /// Fold one tick's lane observation into the memory.
    ///
    /// Same lane: the clock accumulates `tick_secs`.  Different lane (a
    /// change completed, or the simulator repositioned ego): the clock
    /// resets to `lane_time_floor`.
    pub fn observe(&mut self, lane: LaneId, tick_secs: f64, lane_time_floor: f64) {
        if lane == self.lane {
            self.time_in_lane_secs += tick_secs;
        } else {
            self.lane = lane;
            self.time_in_lane_secs = lane_time_floor;
        }
    }
}
