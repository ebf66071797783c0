//! Fixed-step accumulator
//!
//! Hosts render at whatever rate they get. The stepper converts elapsed
//! frame time into whole simulation steps of `SIM_DT`, carrying the remainder
//! into the next frame.

use super::input::InputSource;
use super::tick::{SimulationSession, StepResult};
use crate::consts::*;

/// Converts variable frame time into fixed simulation steps
#[derive(Debug, Clone, Default)]
pub struct FixedStepper {
    accumulator: f32,
}

impl FixedStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run as many fixed steps as `frame_time` covers.
    ///
    /// Long frames are capped at `MAX_FRAME_TIME` and at most `MAX_SUBSTEPS`
    /// steps run per frame. Results come back in step order.
    pub fn frame<I: InputSource>(
        &mut self,
        frame_time: f32,
        session: &mut SimulationSession<I>,
    ) -> Vec<StepResult> {
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut results = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            results.push(session.advance(SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        results
    }

    /// Fraction of a step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / SIM_DT).clamp(0.0, 1.0)
    }
}
