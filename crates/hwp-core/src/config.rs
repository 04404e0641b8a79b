//! Planner configuration.
//!
//! # Design
//!
//! Every tuning constant the pipeline uses lives here as a field, with the
//! values the planner was originally tuned against as `Default`.  None of
//! them has a documented derivation — they are working values for a 6.9 km
//! three-lane loop track, not hard invariants — so applications override
//! them per deployment instead of the planner hard-coding them.
//!
//! Speeds are carried in mph end to end (the telemetry feed reports ego
//! speed in mph); the single mph→m/s conversion happens at the resampling
//! site in `hwp-trajectory` via [`PlannerConfig::mph_to_mps`].

use crate::LaneId;

/// Top-level planner configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to the planner at startup.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    // ── Road geometry ─────────────────────────────────────────────────────
    /// Width of one lane in metres.
    pub lane_width: f64,

    /// Number of legal lanes, counted from the median outward.
    pub lane_count: u8,

    /// Track arc length at which `s` wraps back to 0.
    pub max_s: f64,

    // ── Horizon ───────────────────────────────────────────────────────────
    /// Seconds between consecutive trajectory points.  The simulator
    /// consumes one point per 0.02 s frame.
    pub tick_secs: f64,

    /// Total points per emitted trajectory, retained tail included.
    pub horizon: usize,

    /// Spacing of the forward spline anchors along `s`, and the forward
    /// x-offset the resampler paces against.
    pub anchor_spacing: f64,

    /// Number of forward anchors (`anchor_spacing`, `2×`, `3×`, …).
    pub anchor_count: usize,

    // ── Behavior costs ────────────────────────────────────────────────────
    /// Forward gap below which the chosen lane counts as blocked and the
    /// reference speed ramps down.
    pub too_close_gap: f64,

    /// Numerator of the keep-lane forward-gap cost term.
    pub keep_weight: f64,

    /// Numerator of both lane-change gap cost terms.
    pub change_weight: f64,

    /// Numerator of the lane-change recency penalty: `penalty / time_in_lane`.
    pub switch_penalty: f64,

    /// `time_in_lane` floor (seconds) right after a lane change.  Keeps the
    /// recency penalty finite and maximal on the first tick in a new lane.
    pub lane_time_floor: f64,

    /// Gap value standing in for "no vehicle in that direction".
    pub gap_sentinel: f64,

    /// Floor applied to gap distances before inversion so a vehicle exactly
    /// alongside ego cannot divide by zero.
    pub gap_epsilon: f64,

    // ── Speed ramp ────────────────────────────────────────────────────────
    /// Reference-speed increment per tick, mph (~5 m/s² at the 0.02 s tick).
    pub accel_step_mph: f64,

    /// Braking multiplier on `accel_step_mph` when the lane ahead is blocked.
    pub brake_factor: f64,

    /// Cruising speed ceiling, mph (just under the 50 mph limit).
    pub max_speed_mph: f64,

    /// Divisor converting mph to m/s at the resampling site.
    pub mph_to_mps: f64,

    /// Floor (mph) on the speed used to pace resampled points, so a zero
    /// reference speed cannot divide the chord into zero segments.
    pub pacing_floor_mph: f64,
}

impl PlannerConfig {
    /// Lateral offset of the center of `lane`.
    #[inline]
    pub fn lane_center(&self, lane: LaneId) -> f64 {
        self.lane_width / 2.0 + self.lane_width * lane.index() as f64
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            lane_width:      4.0,
            lane_count:      3,
            max_s:           6_945.554,
            tick_secs:       0.02,
            horizon:         50,
            anchor_spacing:  30.0,
            anchor_count:    3,
            too_close_gap:   30.0,
            keep_weight:     60.0,
            change_weight:   30.0,
            switch_penalty:  1.5,
            lane_time_floor: 0.01,
            gap_sentinel:    9_999.0,
            gap_epsilon:     1e-3,
            accel_step_mph:  0.224,
            brake_factor:    1.5,
            max_speed_mph:   49.5,
            mph_to_mps:       2.24,
            pacing_floor_mph: 0.1,
        }
    }
}
