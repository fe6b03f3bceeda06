//! World state and core simulation types
//!
//! One explicit struct owned by the tick loop replaces the scattered
//! per-field state of a reactive UI.

use glam::Vec2;
use serde::Serialize;

use super::jump::JumpState;
use super::viewport::Viewport;
use super::world::{self, Obstacle, OBSTACLE_COUNT};

/// Parallax scroll offsets and distance traveled
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScrollState {
    /// Tree layer offset (moves at midground speed)
    pub background_offset: f32,
    /// Ground and obstacle offset (moves at foreground speed)
    pub foreground_offset: f32,
    /// Signed distance walked since start
    pub absolute_distance: f32,
    /// `ceil(absolute_distance / width)`, taken before the current tick's step
    pub ground_tile_index: i32,
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize)]
pub struct WorldState {
    pub viewport: Viewport,
    /// Character position in screen space (x = horizontal, y = vertical, y down)
    pub pos: Vec2,
    pub scroll: ScrollState,
    pub jump: JumpState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl WorldState {
    /// Character centered horizontally, standing on the lower bound
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pos: Vec2::new(viewport.width() / 2.0, viewport.max_down()),
            scroll: ScrollState::default(),
            jump: JumpState::default(),
            time_ticks: 0,
        }
    }

    /// Adopt a new window size. Position and offsets are left alone; only
    /// the derived bounds and obstacles change.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!(
                "Viewport resized to {}x{}",
                viewport.width(),
                viewport.height()
            );
            self.viewport = viewport;
        }
    }

    /// Current obstacles
    pub fn obstacles(&self) -> [Obstacle; OBSTACLE_COUNT] {
        world::obstacles(&self.viewport, self.scroll.foreground_offset)
    }

    /// Standing in the ground band where obstacles can block
    pub fn is_grounded(&self) -> bool {
        self.pos.y > self.viewport.ground_line()
    }
}
