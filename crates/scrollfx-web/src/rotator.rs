//! DOM wiring for the pinned headline rotator.
//!
//! Measures live geometry each frame, maps it through the pure
//! `scrollfx_core::rotator` functions, and writes opacity/transform/class
//! back to the headline elements.

use crate::dom;
use crate::scheduler::FrameScheduler;
use scrollfx_core::rotator::{map_frame, RotatorConfig, RotatorFrame, SectionGeometry};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const WRAPPER_ID: &str = "services";
const TRACK_SELECTOR: &str = ".rotator-track";
const HEADLINE_SELECTOR: &str = ".headline";
const ACTIVE_CLASS: &str = "active";

pub fn init(document: &web::Document) {
    let Some(wrapper) = document.get_element_by_id(WRAPPER_ID) else {
        return;
    };
    let Ok(Some(track)) = wrapper.query_selector(TRACK_SELECTOR) else {
        return;
    };
    let headlines = dom::query_all(&wrapper, HEADLINE_SELECTOR);
    if headlines.is_empty() {
        return;
    }
    log::info!("[rotator] wired {} headlines", headlines.len());

    let config = read_config(&wrapper).sanitized();

    let update = {
        let wrapper = wrapper.clone();
        let track = track.clone();
        let headlines = headlines.clone();
        move || {
            let geom = measure(&wrapper, &headlines);
            let frame = map_frame(&geom, &config, headlines.len());
            apply(&track, &headlines, &frame);
        }
    };

    let scheduler = Rc::new(FrameScheduler::new(update));

    let on_scroll = {
        let scheduler = scheduler.clone();
        Closure::wrap(Box::new(move || scheduler.request()) as Box<dyn FnMut()>)
    };
    dom::add_passive_window_listener("scroll", &on_scroll);
    on_scroll.forget();

    let on_resize = {
        let scheduler = scheduler.clone();
        Closure::wrap(Box::new(move || scheduler.request()) as Box<dyn FnMut()>)
    };
    dom::add_window_listener("resize", &on_resize);
    on_resize.forget();

    // first paint
    scheduler.request();
}

fn read_config(wrapper: &web::Element) -> RotatorConfig {
    let d = RotatorConfig::default();
    RotatorConfig {
        speed: dom::attr_f32(wrapper, "data-speed", d.speed),
        delay: dom::attr_f32(wrapper, "data-delay", d.delay),
        in_start: dom::attr_f32(wrapper, "data-in-start-offset", d.in_start),
        in_target: dom::attr_f32(wrapper, "data-in-target-offset", d.in_target),
        out_start: dom::attr_f32(wrapper, "data-out-start-offset", d.out_start),
        out_end: dom::attr_f32(wrapper, "data-out-end-offset", d.out_end),
        first_delay: dom::attr_f32(wrapper, "data-first-delay", d.first_delay),
    }
}

fn measure(wrapper: &web::Element, headlines: &[web::Element]) -> SectionGeometry {
    let viewport_h = dom::viewport_height();
    let wrapper_top = wrapper
        .dyn_ref::<web::HtmlElement>()
        .map(|h| h.offset_top() as f32)
        .unwrap_or(0.0);
    // slides sit closer together when translated by actual headline height
    let element_h = headlines
        .first()
        .map(|h| h.client_height() as f32)
        .filter(|h| *h > 0.0)
        .unwrap_or(viewport_h);
    SectionGeometry {
        scroll_y: dom::scroll_y(),
        viewport_h,
        wrapper_top,
        wrapper_h: wrapper.client_height() as f32,
        element_h,
    }
}

fn apply(track: &web::Element, headlines: &[web::Element], frame: &RotatorFrame) {
    for (el, visual) in headlines.iter().zip(frame.elements.iter()) {
        dom::set_style(el, "opacity", &format!("{:.3}", visual.opacity));
        dom::set_style(el, "transform", &format!("scale({:.4})", visual.scale));
        dom::set_class(el, ACTIVE_CLASS, visual.active);
    }
    dom::set_style(
        track,
        "transform",
        &format!("translate3d(0, {:.2}px, 0)", frame.track_translate_y),
    );
}
