//! Wire format: inbound telemetry events and outbound control responses.
//!
//! Events arrive as JSON 2-tuples, `["telemetry", {...}]` for a snapshot and
//! anything else for manual-mode chatter.  Responses go back the same way:
//! `["control", {"next_x": [...], "next_y": [...]}]` with the trajectory, or
//! `["manual", {}]` when there is nothing to instruct.

use hwp_core::{CartesianPoint, FrenetPoint};
use serde::Deserialize;
use serde_json::{Value, json};

/// One row of the sensed-vehicle table:
/// `[id, x, y, vx, vy, s, d]`.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct SensorRow(pub u32, pub f64, pub f64, pub f64, pub f64, pub f64, pub f64);

impl SensorRow {
    #[inline]
    pub fn id(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn position(&self) -> CartesianPoint {
        CartesianPoint::new(self.1, self.2)
    }

    /// Ground speed magnitude from the velocity components.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.3.hypot(self.4)
    }

    #[inline]
    pub fn frenet(&self) -> FrenetPoint {
        FrenetPoint::new(self.5, self.6)
    }
}

/// One full telemetry snapshot as sent by the feed.
///
/// Field names follow the wire payload exactly.  `yaw` is degrees and
/// `speed` is mph; both are converted at the cycle boundary, never stored
/// converted.
#[derive(Clone, Debug, Deserialize)]
pub struct TelemetrySnapshot {
    /// Ego world position.
    pub x: f64,
    pub y: f64,
    /// Ego track coordinates as the feed computed them.
    pub s: f64,
    pub d: f64,
    /// Ego heading, degrees.
    pub yaw: f64,
    /// Ego speed, mph.
    pub speed: f64,
    /// Unconsumed points of the previously emitted trajectory.
    pub previous_path_x: Vec<f64>,
    pub previous_path_y: Vec<f64>,
    /// Track coordinates of the last retained point (zero when the tail is
    /// empty).
    pub end_path_s: f64,
    pub end_path_d: f64,
    /// Every other vehicle the sensors currently see.
    pub sensor_fusion: Vec<SensorRow>,
}

impl TelemetrySnapshot {
    /// The retained tail zipped back into points.
    pub fn previous_tail(&self) -> Vec<CartesianPoint> {
        self.previous_path_x
            .iter()
            .zip(self.previous_path_y.iter())
            .map(|(&x, &y)| CartesianPoint::new(x, y))
            .collect()
    }
}

/// A decoded inbound event.
#[derive(Clone, Debug)]
pub enum Inbound {
    Telemetry(Box<TelemetrySnapshot>),
    /// Not a telemetry event (manual mode, malformed JSON, wrong shape).
    Unrecognized,
}

/// Decode one inbound event string.
///
/// Decoding never fails: anything that is not a well-formed
/// `["telemetry", {...}]` pair comes back as [`Inbound::Unrecognized`] and
/// the caller answers with the neutral response.
pub fn decode_event(text: &str) -> Inbound {
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return Inbound::Unrecognized;
    };
    let Some(items) = value.as_array() else {
        return Inbound::Unrecognized;
    };
    let [kind, payload] = items.as_slice() else {
        return Inbound::Unrecognized;
    };
    if kind.as_str() != Some("telemetry") {
        return Inbound::Unrecognized;
    }
    match TelemetrySnapshot::deserialize(payload) {
        Ok(snapshot) => Inbound::Telemetry(Box::new(snapshot)),
        Err(_) => Inbound::Unrecognized,
    }
}

/// An outbound response, one per inbound event.
#[derive(Clone, Debug, PartialEq)]
pub enum PlannerResponse {
    /// The next trajectory, split into parallel coordinate arrays.
    Trajectory { next_x: Vec<f64>, next_y: Vec<f64> },
    /// Nothing to instruct this tick.
    NoInstruction,
}

impl PlannerResponse {
    /// Wrap a planned path into the trajectory response.
    pub fn from_path(path: &[CartesianPoint]) -> Self {
        Self::Trajectory {
            next_x: path.iter().map(|p| p.x).collect(),
            next_y: path.iter().map(|p| p.y).collect(),
        }
    }

    /// Encode as the wire 2-tuple.
    pub fn encode(&self) -> String {
        let value = match self {
            Self::Trajectory { next_x, next_y } => {
                json!(["control", { "next_x": next_x, "next_y": next_y }])
            }
            Self::NoInstruction => json!(["manual", {}]),
        };
        value.to_string()
    }
}
