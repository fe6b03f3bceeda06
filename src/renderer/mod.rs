//! Rendering module
//!
//! `frame` is the platform-independent snapshot; `dom` paints it on the web.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use frame::{LayerPlacement, RenderFrame};

#[cfg(target_arch = "wasm32")]
pub use dom::{DomError, DomRenderer};
