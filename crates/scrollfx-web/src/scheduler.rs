//! Frame coalescing for scroll/resize driven effects.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the pending-frame flag and a single `requestAnimationFrame`
/// callback. However many scroll events land between rendered frames,
/// the update runs at most once per frame.
pub struct FrameScheduler {
    pending: Rc<Cell<bool>>,
    frame: Closure<dyn FnMut()>,
}

impl FrameScheduler {
    pub fn new(mut update: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(false));
        let pending_in_frame = pending.clone();
        let frame = Closure::wrap(Box::new(move || {
            pending_in_frame.set(false);
            update();
        }) as Box<dyn FnMut()>);
        Self { pending, frame }
    }

    /// Request an update on the next rendered frame; a no-op while one is
    /// already scheduled.
    pub fn request(&self) {
        if self.pending.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(self.frame.as_ref().unchecked_ref());
        }
    }
}

/// Start a self-rescheduling rAF loop that runs `step` until it returns
/// false. Used for short settle animations (cursor tilt, scroll tweens).
pub fn run_until_settled(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<std::cell::RefCell<Option<Closure<dyn FnMut()>>>> =
        Rc::new(std::cell::RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            // drop the closure once settled
            tick_clone.borrow_mut().take();
            return;
        }
        if let (Some(w), Some(t)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(t.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(t)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(t.as_ref().unchecked_ref());
    }
}
