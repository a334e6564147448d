#![cfg(target_arch = "wasm32")]
use flick_core::{Animator, SpringParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod transform;

use constants::CARD_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flick-web starting");

    // Without the card there is nothing to animate.
    init().map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let card: web::HtmlElement = document
        .get_element_by_id(CARD_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CARD_ELEMENT_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", CARD_ELEMENT_ID, e))?;
    let start_ms =
        dom::performance_now().ok_or_else(|| anyhow::anyhow!("no performance clock"))?;

    let params = SpringParams::default();
    log::info!(
        "[spring] k={} c={} m={} zeta={:.2}",
        params.stiffness,
        params.damping,
        params.mass,
        params.damping_ratio()
    );
    let animator = Animator::new(params, render::ElementSink::new(card.clone()), start_ms)?;
    let animator = Rc::new(RefCell::new(animator));

    events::wire_pointer_handlers(&card, animator.clone());
    frame::start_loop(animator);
    Ok(())
}
