//! Horizontal blocking against obstacles
//!
//! Only a character standing in the ground band (below `Viewport::ground_line`)
//! can be blocked. Anything higher up, mid-jump or walked upward, passes over
//! the obstacles.
//!
//! Movement in both directions consults `block_right`. `block_left` has its
//! own padding and is kept for callers that want the stricter leftward
//! check, but the movement tick does not use it.

use glam::Vec2;

use super::tick::TickInput;
use super::viewport::Viewport;
use super::world::Obstacle;
use crate::tuning::Tuning;

/// Whether a horizontal move this tick is blocked by any obstacle
pub fn block_right(
    pos: Vec2,
    input: &TickInput,
    obstacles: &[Obstacle],
    viewport: &Viewport,
    tuning: &Tuning,
) -> bool {
    let pad = tuning.collision_padding();
    let grounded = pos.y > viewport.ground_line();

    for block in obstacles {
        let overlaps = pos.x + pad >= block.left && pos.x - pad <= block.right();
        if !(overlaps && grounded) {
            continue;
        }

        if input.right && block.left <= pos.x + pad {
            log::trace!("blocked right at x={} by obstacle at {}", pos.x, block.left);
            return true;
        } else if input.left && block.right() >= pos.x + tuning.left_reach() {
            log::trace!("blocked left at x={} by obstacle at {}", pos.x, block.left);
            return true;
        }
    }

    false
}

/// Stricter leftward predicate with its own lead/trail padding
pub fn block_left(
    pos: Vec2,
    input: &TickInput,
    obstacles: &[Obstacle],
    viewport: &Viewport,
    tuning: &Tuning,
) -> bool {
    let grounded = pos.y > viewport.ground_line();

    obstacles.iter().any(|block| {
        input.left
            && pos.x + tuning.block_left_lead >= block.left
            && pos.x - tuning.block_left_trail <= block.right()
            && grounded
    })
}
