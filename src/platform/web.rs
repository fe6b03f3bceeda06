//! Browser glue: scoped event listeners and window size polling

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::sim::{Viewport, ViewportError};

/// An event listener that is removed again when the guard drops
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        log::info!("Listening for `{}`", event);
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::info!("Stopped listening for `{}`", self.event);
    }
}

/// Current `innerWidth` × `innerHeight`. None when there is no window.
pub fn window_viewport() -> Option<Result<Viewport, ViewportError>> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()? as f32;
    let height = window.inner_height().ok()?.as_f64()? as f32;
    Some(Viewport::new(width, height))
}
