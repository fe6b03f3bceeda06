//! Static world geometry
//!
//! Obstacles and ground tiles are never stored. They are derived from the
//! viewport and the current foreground offset whenever someone asks.

use serde::Serialize;

use super::viewport::Viewport;

/// Number of obstacles in the world
pub const OBSTACLE_COUNT: usize = 2;

/// Number of ground strips painted around the current tile
pub const GROUND_TILE_SPAN: usize = 4;

/// An axis-aligned obstacle rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Right edge (`left + width`)
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// The two obstacles for this viewport and scroll position
pub fn obstacles(viewport: &Viewport, foreground_offset: f32) -> [Obstacle; OBSTACLE_COUNT] {
    let w = viewport.width();
    let h = viewport.height();
    let top = viewport.ground_line();
    let height = h / 8.0;

    [
        Obstacle {
            top,
            left: (w - w / 4.0) + foreground_offset,
            width: w / 4.0,
            height,
        },
        Obstacle {
            top,
            left: -w / 4.0 + foreground_offset,
            width: w / 8.0,
            height,
        },
    ]
}

/// A ground strip, one viewport wide
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroundTile {
    pub index: i32,
    pub left: f32,
    pub top: f32,
}

/// Ground strips around `ground_tile_index` (two behind, the tile itself, one ahead)
pub fn ground_tiles(
    viewport: &Viewport,
    ground_tile_index: i32,
    foreground_offset: f32,
) -> [GroundTile; GROUND_TILE_SPAN] {
    let w = viewport.width();
    let h = viewport.height();
    let top = h - h / 4.0 + h / 16.0;

    std::array::from_fn(|i| {
        let index = ground_tile_index - 2 + i as i32;
        GroundTile {
            index,
            left: w * index as f32 + foreground_offset,
            top,
        }
    })
}
