use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Parse a numeric attribute, falling back to the default when the attribute
/// is absent or unparsable.
#[inline]
pub fn attr_f32(el: &web::Element, name: &str, default: f32) -> f32 {
    el.get_attribute(name)
        .and_then(|v| v.trim().parse::<f32>().ok())
        .unwrap_or(default)
}

/// Collect every element matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn add_window_listener(event: &str, closure: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
}

/// Passive listeners never block scrolling, which is what every per-frame
/// effect here wants.
#[inline]
pub fn add_passive_window_listener(event: &str, closure: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        let _ = w.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    if on {
        let _ = list.add_1(class);
    } else {
        let _ = list.remove_1(class);
    }
}

/// True when the device reports a fine pointer (mouse); cursor-follow
/// effects stay off for touch.
#[inline]
pub fn has_fine_pointer() -> bool {
    web::window()
        .and_then(|w| w.match_media("(pointer: fine)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
