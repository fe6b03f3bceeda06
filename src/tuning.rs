//! Movement tuning
//!
//! Every speed and physics constant the simulation reads. Defaults match
//! `crate::consts`; a JSON document can override any subset of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning values
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("tuning value `{field}` must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

/// Movement and physics constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Character and foreground scroll speed (pixels/tick)
    pub foreground_move_speed: f32,
    /// Tree layer scroll speed (pixels/tick)
    pub midground_move_speed: f32,
    /// Far layer scroll speed (pixels/tick)
    pub background_move_speed: f32,

    // === Jump ===
    pub gravity: f32,
    pub launch_velocity: f32,
    /// Time advanced per jump loop
    pub jump_time_step: f32,

    // === Collision ===
    /// Padding around the character, in foreground steps
    pub collision_padding_steps: f32,
    /// Reach of a leftward approach, in foreground steps
    pub left_reach_steps: f32,
    pub block_left_lead: f32,
    pub block_left_trail: f32,

    // === Loop ===
    /// Simulation step (seconds)
    pub tick_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            foreground_move_speed: FOREGROUND_MOVE_SPEED,
            midground_move_speed: MIDGROUND_MOVE_SPEED,
            background_move_speed: BACKGROUND_MOVE_SPEED,

            gravity: GRAVITY,
            launch_velocity: LAUNCH_VELOCITY,
            jump_time_step: JUMP_TIME_STEP,

            collision_padding_steps: COLLISION_PADDING_STEPS,
            left_reach_steps: LEFT_REACH_STEPS,
            block_left_lead: BLOCK_LEFT_LEAD,
            block_left_trail: BLOCK_LEFT_TRAIL,

            tick_dt: SIM_DT,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Speeds, gravity, launch velocity and time steps must be positive
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("foreground_move_speed", self.foreground_move_speed),
            ("midground_move_speed", self.midground_move_speed),
            ("background_move_speed", self.background_move_speed),
            ("gravity", self.gravity),
            ("launch_velocity", self.launch_velocity),
            ("jump_time_step", self.jump_time_step),
            ("tick_dt", self.tick_dt),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Collision padding in pixels (`padding steps × foreground speed`)
    #[inline]
    pub fn collision_padding(&self) -> f32 {
        self.foreground_move_speed * self.collision_padding_steps
    }

    /// Leftward approach reach in pixels
    #[inline]
    pub fn left_reach(&self) -> f32 {
        self.foreground_move_speed * self.left_reach_steps
    }

    /// Element id of the optional inline tuning document
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "tuning";

    /// Load tuning from an inline `<script type="application/json" id="tuning">`
    /// element (WASM only). Falls back to defaults when absent or invalid.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from page");
                    return tuning;
                }
                Err(e) => log::warn!("Ignoring page tuning: {}", e),
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &str) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
