//! Read-only snapshot of everything a renderer needs for one frame

use glam::Vec2;
use serde::Serialize;

use crate::sim::world::{GROUND_TILE_SPAN, OBSTACLE_COUNT};
use crate::sim::{GroundTile, Obstacle, Viewport, WorldState, ground_tiles};

/// Tree layer placement (moves with the background offset)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerPlacement {
    pub left: f32,
    pub top: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    pub tick: u64,
    pub viewport: Viewport,
    pub character: Vec2,
    pub jumping: bool,
    pub background_offset: f32,
    pub foreground_offset: f32,
    pub ground_tile_index: i32,
    pub trees: LayerPlacement,
    pub ground_tiles: [GroundTile; GROUND_TILE_SPAN],
    pub obstacles: [Obstacle; OBSTACLE_COUNT],
}

impl RenderFrame {
    pub fn capture(state: &WorldState) -> Self {
        let vp = state.viewport;
        let scroll = &state.scroll;
        Self {
            tick: state.time_ticks,
            viewport: vp,
            character: state.pos,
            jumping: state.jump.active,
            background_offset: scroll.background_offset,
            foreground_offset: scroll.foreground_offset,
            ground_tile_index: scroll.ground_tile_index,
            trees: LayerPlacement {
                left: scroll.background_offset,
                top: vp.height() - vp.height() / 2.0,
            },
            ground_tiles: ground_tiles(&vp, scroll.ground_tile_index, scroll.foreground_offset),
            obstacles: state.obstacles(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Debug readout of the character position
    pub fn position_text(&self) -> String {
        format!("test: {},{}", self.character.x, self.character.y)
    }

    /// Debug readout of the window size and current ground tile
    pub fn viewport_text(&self) -> String {
        format!(
            "Window Dimensions: {}, {} | GroundTiles: {}",
            self.viewport.width(),
            self.viewport.height(),
            self.ground_tile_index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};
    use crate::tuning::Tuning;

    fn world() -> WorldState {
        WorldState::new(Viewport::new(800.0, 600.0).unwrap())
    }

    #[test]
    fn test_capture_initial_frame() {
        let frame = RenderFrame::capture(&world());
        assert_eq!(frame.character, Vec2::new(400.0, 450.0));
        assert_eq!(frame.trees, LayerPlacement { left: 0.0, top: 300.0 });
        assert_eq!(frame.obstacles[0].left, 600.0);
        assert_eq!(frame.ground_tiles[2].index, 0);
        assert!(!frame.jumping);
    }

    #[test]
    fn test_hud_text() {
        let frame = RenderFrame::capture(&world());
        assert_eq!(frame.position_text(), "test: 400,450");
        assert_eq!(frame.viewport_text(), "Window Dimensions: 800, 600 | GroundTiles: 0");
    }

    #[test]
    fn test_json_snapshot() {
        let mut state = world();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, &Tuning::default());

        let json = RenderFrame::capture(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tick"], 1);
        assert_eq!(value["jumping"], true);
        assert_eq!(value["obstacles"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(value["ground_tiles"].as_array().map(|a| a.len()), Some(4));
        assert_eq!(value["viewport"]["width"], 800.0);
    }
}
