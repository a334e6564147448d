use crate::render::ElementSink;
use flick_core::{Animator, PointerCapture, PointerInput};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedAnimator = Rc<RefCell<Animator<ElementSink>>>;

/// `setPointerCapture` on the card. The browser releases it on up/cancel.
struct ElementCapture<'a> {
    element: &'a web::HtmlElement,
}

impl PointerCapture for ElementCapture<'_> {
    fn capture(&mut self, pointer_id: i32) {
        if let Err(e) = self.element.set_pointer_capture(pointer_id) {
            log::warn!("[drag] setPointerCapture({}) failed: {:?}", pointer_id, e);
        }
    }
}

#[inline]
fn pointer_input(ev: &web::PointerEvent) -> PointerInput {
    PointerInput::new(
        ev.pointer_id(),
        ev.client_x() as f64,
        ev.client_y() as f64,
        ev.time_stamp(),
    )
}

pub fn wire_pointer_handlers(element: &web::HtmlElement, animator: SharedAnimator) {
    wire_pointerdown(element, animator.clone());
    wire_pointermove(element, animator.clone());
    wire_pointerup(element, animator.clone());
    wire_pointercancel(element, animator);
}

fn listen(
    element: &web::HtmlElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    if let Err(e) =
        element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("[events] {} listener failed: {:?}", event, e);
    }
    closure.forget();
}

fn wire_pointerdown(element: &web::HtmlElement, animator: SharedAnimator) {
    let target = element.clone();
    listen(element, "pointerdown", move |ev: web::PointerEvent| {
        let mut capture = ElementCapture { element: &target };
        animator
            .borrow_mut()
            .on_pointer_down(&pointer_input(&ev), &mut capture);
    });
}

fn wire_pointermove(element: &web::HtmlElement, animator: SharedAnimator) {
    listen(element, "pointermove", move |ev: web::PointerEvent| {
        animator.borrow_mut().on_pointer_move(&pointer_input(&ev));
    });
}

fn wire_pointerup(element: &web::HtmlElement, animator: SharedAnimator) {
    listen(element, "pointerup", move |ev: web::PointerEvent| {
        animator.borrow_mut().on_pointer_up(&pointer_input(&ev));
    });
}

fn wire_pointercancel(element: &web::HtmlElement, animator: SharedAnimator) {
    listen(element, "pointercancel", move |_ev: web::PointerEvent| {
        animator.borrow_mut().on_pointer_cancel();
    });
}
