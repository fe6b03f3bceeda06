//! Deterministic simulation module
//!
//! All movement logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Viewport and input passed in, never polled
//! - No rendering or platform dependencies

pub mod collision;
pub mod jump;
pub mod state;
pub mod tick;
pub mod timestep;
pub mod viewport;
pub mod world;

pub use collision::{block_left, block_right};
pub use jump::{JumpState, JumpStep};
pub use state::{ScrollState, WorldState};
pub use tick::{TickInput, TickOutcome, tick};
pub use timestep::FixedTimestep;
pub use viewport::{Viewport, ViewportError};
pub use world::{GroundTile, Obstacle, ground_tiles, obstacles};
