use crate::constants::TRANSFORM_PROPERTY;
use crate::transform::write_translate;
use flick_core::{DVec2, RenderSink};
use web_sys as web;

/// Writes the simulated offset into the card's CSS transform.
pub struct ElementSink {
    element: web::HtmlElement,
    css: String,
}

impl ElementSink {
    pub fn new(element: web::HtmlElement) -> Self {
        Self {
            element,
            css: String::with_capacity(48),
        }
    }
}

impl RenderSink for ElementSink {
    fn apply(&mut self, position: DVec2) {
        write_translate(&mut self.css, position);
        if let Err(e) = self
            .element
            .style()
            .set_property(TRANSFORM_PROPERTY, &self.css)
        {
            log::error!("[render] set {} failed: {:?}", TRANSFORM_PROPERTY, e);
        }
    }
}
