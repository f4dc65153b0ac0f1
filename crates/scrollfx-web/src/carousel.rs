//! DOM wiring for the mobile project carousel.
//!
//! Only active at mobile widths; layout switching between the carousel and
//! the desktop stack is the styling layer's job.

use crate::dom;
use scrollfx_core::carousel::{CardRole, Carousel};
use scrollfx_core::constants::MOBILE_BREAKPOINT_PX;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CONTAINER_SELECTOR: &str = ".projects-box";
const NEXT_BUTTON_ID: &str = "next-project-btn";
const CARD_SELECTOR: &str = ".project-card";

pub fn init(document: &web::Document) {
    if dom::viewport_width() > MOBILE_BREAKPOINT_PX {
        return;
    }
    let Ok(Some(container)) = document.query_selector(CONTAINER_SELECTOR) else {
        return;
    };
    let Some(next_btn) = document.get_element_by_id(NEXT_BUTTON_ID) else {
        return;
    };
    let cards = dom::query_all(&container, CARD_SELECTOR);
    if cards.is_empty() {
        return;
    }
    log::info!("[carousel] wired {} cards", cards.len());

    let state = Rc::new(RefCell::new(Carousel::new(cards.len())));
    apply(&cards, &state.borrow());

    let closure = {
        let state = state.clone();
        let cards = cards.clone();
        Closure::wrap(Box::new(move || {
            state.borrow_mut().advance();
            apply(&cards, &state.borrow());
        }) as Box<dyn FnMut()>)
    };
    let _ = next_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Class toggles only; the CSS transition handles opacity and scale.
fn apply(cards: &[web::Element], state: &Carousel) {
    for (i, card) in cards.iter().enumerate() {
        let role = state.role_of(i);
        dom::set_class(card, "active", role == CardRole::Active);
        dom::set_class(card, "next", role == CardRole::Next);
    }
}
