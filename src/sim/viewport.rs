//! Viewport dimensions and the movement bounds derived from them

use serde::Serialize;
use thiserror::Error;

/// Rejected viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("viewport must have positive finite dimensions, got {width}x{height}")]
pub struct ViewportError {
    pub width: f32,
    pub height: f32,
}

/// Window size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Rejects zero-size, negative and non-finite dimensions
    pub fn new(width: f32, height: f32) -> Result<Self, ViewportError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(ViewportError { width, height })
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Leftmost horizontal position before the world scrolls instead
    #[inline]
    pub fn max_left(&self) -> f32 {
        self.width / 4.0
    }

    /// Rightmost horizontal position before the world scrolls instead
    #[inline]
    pub fn max_right(&self) -> f32 {
        self.width - self.width / 4.0
    }

    #[inline]
    pub fn max_up(&self) -> f32 {
        self.height / 4.0
    }

    #[inline]
    pub fn max_down(&self) -> f32 {
        self.height - self.height / 4.0
    }

    /// Vertical line the character must be below to count as standing on
    /// the ground (obstacle tops sit here too)
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.height - self.height / 3.0
    }
}
