//! Smooth scrolling for same-page anchor links.
//!
//! Click handling is delegated at the document level so links added later
//! still work. The tween itself is pure (`scrollfx_core::smooth`); this
//! module owns the rAF loop and the history update on completion.

use crate::dom;
use crate::scheduler::run_until_settled;
use instant::Instant;
use scrollfx_core::constants::DEFAULT_SCROLL_DURATION_MS;
use scrollfx_core::smooth::ScrollTween;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const LOAD_HASH_DEFER_MS: i32 = 60;

pub fn init(document: &web::Document) {
    wire_click_delegation(document);
    scroll_to_initial_hash();
}

fn wire_click_delegation(document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if !href.starts_with('#') {
            return;
        }
        ev.prevent_default();
        let duration = dom::attr_f32(&anchor, "data-scroll-duration", DEFAULT_SCROLL_DURATION_MS);
        scroll_to_hash(&doc, &href, duration, true);
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// A page opened with a hash scrolls to it shortly after load; deferred a
/// beat so initial layout has settled.
fn scroll_to_initial_hash() {
    let Some(window) = web::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    if hash.is_empty() {
        return;
    }
    let closure = Closure::wrap(Box::new(move || {
        if let Some(doc) = dom::window_document() {
            scroll_to_hash(&doc, &hash, DEFAULT_SCROLL_DURATION_MS, false);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        LOAD_HASH_DEFER_MS,
    );
    closure.forget();
}

/// Animate to the element a hash names, or to the top when the hash is bare
/// or unresolvable. Updates history once the tween lands.
pub fn scroll_to_hash(document: &web::Document, hash: &str, duration_ms: f32, update_history: bool) {
    let target_y = resolve_hash_y(document, hash).unwrap_or(0.0);
    let tween = ScrollTween::new(dom::scroll_y(), target_y, duration_ms);
    let hash_out = if hash.len() > 1 { hash.to_string() } else { "#".to_string() };

    let start = Instant::now();
    run_until_settled(move || {
        let elapsed_ms = start.elapsed().as_secs_f32() * 1000.0;
        let (y, done) = tween.position_at(elapsed_ms);
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, y.round() as f64);
        }
        if done && update_history {
            replace_hash(&hash_out);
        }
        !done
    });
}

fn resolve_hash_y(document: &web::Document, hash: &str) -> Option<f32> {
    if hash.len() <= 1 {
        return Some(0.0);
    }
    let id = js_sys::decode_uri_component(&hash[1..])
        .map(String::from)
        .unwrap_or_else(|_| hash[1..].to_string());
    let target = document.get_element_by_id(&id)?;
    let rect = target.get_bounding_client_rect();
    Some((dom::scroll_y() + rect.top() as f32).max(0.0))
}

fn replace_hash(hash: &str) {
    if let Some(history) = web::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(hash));
    }
}
