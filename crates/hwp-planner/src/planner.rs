//! The stateful planner a transport drives.

use hwp_core::{CartesianPoint, PlannerConfig};
use hwp_map::TrackMap;

use crate::{
    CycleState, Inbound, PlanResult, PlannerResponse, TelemetrySnapshot, decode_event, plan_cycle,
};

/// Owns the track map, the configuration, and the carried cycle state.
///
/// One `Planner` serves one vehicle.  Calls to [`plan`][Planner::plan] must
/// be serialized — the cycle reads and commits the carried state as a unit.
pub struct Planner {
    map: TrackMap,
    config: PlannerConfig,
    state: CycleState,
}

impl Planner {
    pub fn new(map: TrackMap, config: PlannerConfig) -> Self {
        let state = CycleState::startup(&config);
        Self { map, config, state }
    }

    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Run one cycle against a decoded snapshot and commit the state.
    ///
    /// On error the carried state keeps its pre-cycle value, so one bad
    /// snapshot cannot poison the next tick.
    pub fn plan(&mut self, snapshot: &TelemetrySnapshot) -> PlanResult<Vec<CartesianPoint>> {
        let outcome = plan_cycle(&self.map, &self.config, snapshot, self.state)?;
        self.state = outcome.state;
        Ok(outcome.trajectory)
    }

    /// Decode one raw inbound event, plan, and encode the response.
    ///
    /// Unrecognized events and failed cycles both answer with the neutral
    /// no-instruction response; the transport never sees an error.
    pub fn handle_event(&mut self, text: &str) -> String {
        let response = match decode_event(text) {
            Inbound::Telemetry(snapshot) => match self.plan(&snapshot) {
                Ok(path) => PlannerResponse::from_path(&path),
                Err(_) => PlannerResponse::NoInstruction,
            },
            Inbound::Unrecognized => PlannerResponse::NoInstruction,
        };
        response.encode()
    }
}
