//! DOM wiring for the stacked project cards.
//!
//! The section is held in place by the styling layer; this module maps
//! scroll progress across the pin span to per-card x offsets, and adds a
//! cursor-follow tilt on fine-pointer devices.

use crate::dom;
use crate::scheduler::{run_until_settled, FrameScheduler};
use glam::Vec2;
use scrollfx_core::stack::{
    card_counter_offset, card_travel, pin_span_px, pointer_norm, z_index, TiltState,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SECTION_ID: &str = "projects";
const CONTAINER_SELECTOR: &str = ".projects-box";
const CARD_SELECTOR: &str = ".project-card";
const CARD_INNER_SELECTOR: &str = ".card-inner";

pub fn init(document: &web::Document) {
    let Some(section) = document.get_element_by_id(SECTION_ID) else {
        return;
    };
    let Ok(Some(container)) = section.query_selector(CONTAINER_SELECTOR) else {
        return;
    };
    let cards = dom::query_all(&container, CARD_SELECTOR);
    if cards.is_empty() {
        return;
    }
    log::info!("[stack] wired {} cards", cards.len());

    init_stacking(&cards);
    wire_scroll(&section, &cards);
    if dom::has_fine_pointer() {
        wire_tilt(&section, &container, &cards);
    }
}

/// Earlier cards sit on top; transforms get their own compositor layer.
fn init_stacking(cards: &[web::Element]) {
    let n = cards.len();
    for (i, card) in cards.iter().enumerate() {
        dom::set_style(card, "z-index", &z_index(i, n).to_string());
        dom::set_style(card, "will-change", "transform,opacity");
        dom::set_style(card, "opacity", "1");
    }
}

fn wire_scroll(section: &web::Element, cards: &[web::Element]) {
    let update = {
        let section = section.clone();
        let cards = cards.to_vec();
        move || {
            let viewport_h = dom::viewport_height();
            let viewport_w = dom::viewport_width();
            let span = pin_span_px(viewport_h, viewport_w, cards.len());
            let top = section
                .dyn_ref::<web::HtmlElement>()
                .map(|h| h.offset_top() as f32)
                .unwrap_or(0.0);
            let progress = if span > 0.0 {
                ((dom::scroll_y() - top) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            for (i, card) in cards.iter().enumerate() {
                let x = card_travel(progress, i, cards.len(), viewport_w);
                dom::set_style(card, "transform", &format!("translateX({:.2}px)", x));
            }
        }
    };

    let scheduler = Rc::new(FrameScheduler::new(update));
    for event in ["scroll", "resize"] {
        let closure = {
            let scheduler = scheduler.clone();
            Closure::wrap(Box::new(move || scheduler.request()) as Box<dyn FnMut()>)
        };
        if event == "scroll" {
            dom::add_passive_window_listener(event, &closure);
        } else {
            dom::add_window_listener(event, &closure);
        }
        closure.forget();
    }
    scheduler.request();
}

fn wire_tilt(section: &web::Element, container: &web::Element, cards: &[web::Element]) {
    let tilt = Rc::new(RefCell::new(TiltState::new()));
    let animating = Rc::new(Cell::new(false));

    // counter-motion targets live on the optional inner wrappers so the
    // travel transform on the card itself is left alone
    let inners: Vec<Option<web::Element>> = cards
        .iter()
        .map(|c| c.query_selector(CARD_INNER_SELECTOR).ok().flatten())
        .collect();

    // mousemove: retarget the tilt and kick the settle loop if idle
    {
        let tilt = tilt.clone();
        let animating = animating.clone();
        let section_m = section.clone();
        let container_m = container.clone();
        let inners_m = inners.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = section_m.get_bounding_client_rect();
            let center = Vec2::new(
                (rect.left() + rect.width() / 2.0) as f32,
                (rect.top() + rect.height() / 2.0) as f32,
            );
            let half = Vec2::new((rect.width() / 2.0) as f32, (rect.height() / 2.0) as f32);
            let norm = pointer_norm(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                center,
                half,
            );
            tilt.borrow_mut().set_target_from_pointer(norm);

            for (depth, inner) in inners_m.iter().enumerate() {
                if let Some(inner) = inner {
                    let ox = card_counter_offset(norm.x, depth);
                    dom::set_style(inner, "transform", &format!("translateX({:.2}px)", ox));
                }
            }

            if !animating.get() {
                animating.set(true);
                let tilt = tilt.clone();
                let animating = animating.clone();
                let container = container_m.clone();
                run_until_settled(move || {
                    if !animating.get() {
                        return false;
                    }
                    let moving = tilt.borrow_mut().step();
                    apply_tilt(&container, &tilt.borrow());
                    if !moving {
                        animating.set(false);
                    }
                    moving
                });
            }
        }) as Box<dyn FnMut(_)>);
        let _ = section
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mouseleave: snap tilt home and relax the inners
    {
        let tilt = tilt.clone();
        let animating = animating.clone();
        let container_l = container.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            animating.set(false);
            tilt.borrow_mut().reset();
            apply_tilt(&container_l, &tilt.borrow());
            for inner in inners.iter().flatten() {
                dom::set_style(inner, "transform", "translateX(0px)");
            }
        }) as Box<dyn FnMut(_)>);
        let _ = section
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn apply_tilt(container: &web::Element, tilt: &TiltState) {
    dom::set_style(
        container,
        "--rotateY",
        &format!("{:.2}deg", tilt.rotate_y_deg()),
    );
    dom::set_style(
        container,
        "--rotateX",
        &format!("{:.2}deg", tilt.rotate_x_deg()),
    );
}
