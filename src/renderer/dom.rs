//! DOM painter
//!
//! The page ships absolutely-positioned elements; each frame only moves them.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::frame::RenderFrame;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("page is missing element #{0}")]
    MissingElement(String),
    #[error("element #{0} is not an HtmlElement")]
    NotHtml(String),
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtml(id.to_string()))
}

fn place(el: &HtmlElement, left: f32, top: f32) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{left}px"));
    let _ = style.set_property("top", &format!("{top}px"));
}

fn size(el: &HtmlElement, width: f32, height: f32) {
    let style = el.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
}

pub struct DomRenderer {
    character: HtmlElement,
    trees: HtmlElement,
    ground: Vec<HtmlElement>,
    obstacles: Vec<HtmlElement>,
    hud_position: Option<Element>,
    hud_viewport: Option<Element>,
}

impl DomRenderer {
    pub fn new(document: &Document, ground_count: usize, obstacle_count: usize) -> Result<Self, DomError> {
        let ground = (0..ground_count)
            .map(|i| html_element(document, &format!("ground-{i}")))
            .collect::<Result<Vec<_>, _>>()?;
        let obstacles = (0..obstacle_count)
            .map(|i| html_element(document, &format!("obstacle-{i}")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            character: html_element(document, "character")?,
            trees: html_element(document, "trees")?,
            ground,
            obstacles,
            hud_position: document.get_element_by_id("hud-position"),
            hud_viewport: document.get_element_by_id("hud-viewport"),
        })
    }

    pub fn paint(&self, frame: &RenderFrame) {
        place(&self.character, frame.character.x, frame.character.y);
        place(&self.trees, frame.trees.left, frame.trees.top);

        for (el, tile) in self.ground.iter().zip(frame.ground_tiles.iter()) {
            place(el, tile.left, tile.top);
        }

        for (el, block) in self.obstacles.iter().zip(frame.obstacles.iter()) {
            place(el, block.left, block.top);
            size(el, block.width, block.height);
        }

        if let Some(el) = &self.hud_position {
            el.set_text_content(Some(&frame.position_text()));
        }
        if let Some(el) = &self.hud_viewport {
            el.set_text_content(Some(&frame.viewport_text()));
        }
    }
}
