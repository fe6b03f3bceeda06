//! Parallax Runner - a side-scrolling platformer demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, jump arc, collisions, scroll state)
//! - `renderer`: Read-only frame snapshot plus a DOM painter on the web
//! - `platform`: Browser/native platform abstraction (input, viewport, listeners)
//! - `tuning`: Data-driven movement constants

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (10 ms, 100 Hz)
    pub const SIM_DT: f32 = 0.010;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Character and foreground layer speed (pixels/tick)
    pub const FOREGROUND_MOVE_SPEED: f32 = 6.0;
    /// Tree layer speed (pixels/tick)
    pub const MIDGROUND_MOVE_SPEED: f32 = 3.0;
    /// Far layer speed (pixels/tick); the demo paints no far layer yet
    pub const BACKGROUND_MOVE_SPEED: f32 = 2.0;

    /// Jump gravity (pixels/t²)
    pub const GRAVITY: f32 = 0.7;
    /// Jump launch velocity (pixels/t)
    pub const LAUNCH_VELOCITY: f32 = 6.0;
    /// Jump time increment per loop
    pub const JUMP_TIME_STEP: f32 = 0.5;

    /// Collision padding around the character, in foreground steps
    pub const COLLISION_PADDING_STEPS: f32 = 3.0;
    /// How far ahead a leftward approach reaches, in foreground steps
    pub const LEFT_REACH_STEPS: f32 = 60.0;
    /// Leading edge padding of the leftward predicate (pixels)
    pub const BLOCK_LEFT_LEAD: f32 = 19.0;
    /// Trailing edge padding of the leftward predicate (pixels)
    pub const BLOCK_LEFT_TRAIL: f32 = 8.0;
}

