//! Reference-speed ramp.

use hwp_core::PlannerConfig;

/// Advance the reference speed by one tick.
///
/// Blocked lane ahead: ramp down by `accel_step_mph × brake_factor`.
/// Otherwise ramp up by `accel_step_mph` toward the cruising ceiling.  The
/// result is clamped to `[0, max_speed_mph]`, so the speed never jumps,
/// never goes negative, and never overshoots the ceiling — a first-order
/// ramp, not a longitudinal controller.
pub fn ramp_reference_speed(current_mph: f64, too_close: bool, config: &PlannerConfig) -> f64 {
    let next = if too_close {
        current_mph - config.accel_step_mph * config.brake_factor
    } else {
        current_mph + config.accel_step_mph
    };
    next.clamp(0.0, config.max_speed_mph)
}
