use crate::events::pointer::SharedAnimator;
use flick_core::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` with the loop's own tick closure.
struct RafScheduler<'a> {
    tick: &'a TickClosure,
}

impl FrameScheduler for RafScheduler<'_> {
    fn request_frame(&mut self) {
        let Some(w) = web::window() else {
            log::error!("[frame] no window; animation loop stopped");
            return;
        };
        if let Err(e) = w.request_animation_frame(self.tick.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Start the rAF loop. It re-arms itself every frame and is never cancelled.
pub fn start_loop(animator: SharedAnimator) {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if let Some(cb) = tick_clone.borrow().as_ref() {
            animator
                .borrow_mut()
                .on_frame(timestamp_ms, &mut RafScheduler { tick: cb });
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = tick.borrow().as_ref() {
        RafScheduler { tick: cb }.request_frame();
    }
}
