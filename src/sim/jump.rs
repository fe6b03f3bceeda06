//! Discrete parabolic jump arc
//!
//! The arc is integrated one loop at a time rather than in closed form:
//!
//! ```text
//! h   = v² / 2g          (negative while falling)
//! v'  = v0 - g·t
//! t' += dt
//! ```
//!
//! `h` is taken from the velocity *before* this loop's update, so the arc
//! carries its own rounding.

use serde::Serialize;

use crate::tuning::Tuning;

/// What happened during a single jump loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpStep {
    /// Arc still in flight
    Airborne,
    /// This loop terminated the jump
    Landed,
}

/// State of a single jump arc
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JumpState {
    pub active: bool,
    /// Accumulated jump time
    pub elapsed: f32,
    /// Current vertical velocity (positive = rising)
    pub velocity: f32,
    /// Loops run so far, starting at 1 on launch
    pub loop_count: u32,
    /// Vertical position at launch; the arc never goes below it
    pub ground: f32,
}

impl JumpState {
    /// Launch a jump from the given vertical position. No-op while a jump is
    /// already in flight. Returns true when a new jump started.
    pub fn start(&mut self, vertical: f32, tuning: &Tuning) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.velocity = tuning.launch_velocity;
        self.elapsed = tuning.jump_time_step;
        self.loop_count = 1;
        self.ground = vertical;
        true
    }

    /// Run one loop of the arc, moving `vertical` (screen space, y down)
    pub fn step(&mut self, vertical: &mut f32, tuning: &Tuning) -> JumpStep {
        if !self.active {
            return JumpStep::Landed;
        }

        let g = tuning.gravity;
        let v0 = tuning.launch_velocity;
        let v = self.velocity;

        let landed = v <= -v0;
        if landed {
            self.active = false;
            self.elapsed = 0.0;
            self.velocity = 0.0;
        } else {
            self.velocity = v0 - g * self.elapsed;
            self.elapsed += tuning.jump_time_step;
            self.loop_count += 1;
        }

        let mut h = (v * v) / (2.0 * g);
        if v < 0.0 {
            h = -h;
        }
        *vertical = (*vertical - h).min(self.ground);

        if landed {
            JumpStep::Landed
        } else {
            JumpStep::Airborne
        }
    }
}
