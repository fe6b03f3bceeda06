//! Fixed-step accumulator
//!
//! Turns variable frame deltas into a whole number of simulation steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Step length in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed a frame delta (seconds) and return how many steps to run.
    ///
    /// Long frames (tab in background, debugger) are capped so the loop does
    /// not spiral; leftover time beyond the substep budget is dropped.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
