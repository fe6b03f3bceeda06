//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key press tracking)
//! - Window size and resize events
//! - Headless scripted runs on native

pub mod headless;
pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{Key, PressState};
