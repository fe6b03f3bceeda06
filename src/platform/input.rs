//! Keyboard press tracking
//!
//! Holds whether each tracked key is down, plus which keys went down since
//! the last tick consumed them. Handlers are idempotent: repeated keydown
//! events (auto-repeat, duplicate listeners) leave the state unchanged.

use crate::sim::TickInput;

/// Number of tracked keys
pub const KEY_COUNT: usize = 6;

/// Keys the demo listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
}

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::Space,
        Key::Enter,
    ];

    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            " " | "Spacebar" => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Space => "Space",
            Key::Enter => "Enter",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default)]
pub struct PressState {
    held: [bool; KEY_COUNT],
    just_pressed: [bool; KEY_COUNT],
}

impl PressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Returns true on the up→down edge.
    pub fn press(&mut self, key: Key) -> bool {
        let i = key.index();
        let edge = !self.held[i];
        if edge {
            self.just_pressed[i] = true;
        }
        self.held[i] = true;
        edge
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    #[inline]
    pub fn is_pressed(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Pressed since the last `end_tick`, even if already released again
    #[inline]
    pub fn just_pressed(&self, key: Key) -> bool {
        self.just_pressed[key.index()]
    }

    /// Build this tick's simulation input
    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            right: self.is_pressed(Key::ArrowRight),
            left: self.is_pressed(Key::ArrowLeft),
            up: self.is_pressed(Key::ArrowUp),
            down: self.is_pressed(Key::ArrowDown),
            jump: self.just_pressed(Key::Space),
        }
    }

    /// Clear one-shot edges after a tick consumed them
    pub fn end_tick(&mut self) {
        self.just_pressed = [false; KEY_COUNT];
    }

    /// Drop everything (window lost focus, keyup events will not arrive)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
