//! Lazily mounts and unmounts the contact section's 3D scene overlay.
//!
//! The `spline-viewer` element is expensive, so it only exists while the
//! contact section is near the viewport. A second observer on the projects
//! section starts loading well ahead of arrival, and a direct anchor click
//! forces a mount immediately.

use crate::dom;
use scrollfx_core::scene::{SceneCommand, SceneOverlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const CONTACT_ID: &str = "contact";
const PROJECTS_ID: &str = "projects";
const VIEWER_TAG: &str = "spline-viewer";
const VIEWER_CLASS: &str = "contact-spline";
const READY_CLASS: &str = "spline-ready";
const PRELOAD_ROOT_MARGIN: &str = "800px 0px 0px 0px";
const NEAR_ROOT_MARGIN: &str = "400px 0px 400px 0px";

struct SceneManager {
    section: web::Element,
    state: SceneOverlay,
    url: Option<String>,
}

impl SceneManager {
    fn run(&mut self, command: Option<SceneCommand>) {
        match command {
            Some(SceneCommand::Mount) => self.mount(),
            Some(SceneCommand::Unmount) => self.unmount(),
            None => {}
        }
    }

    fn mount(&mut self) {
        let (Some(url), Some(document)) = (self.url.clone(), dom::window_document()) else {
            return;
        };
        let Ok(el) = document.create_element(VIEWER_TAG) else {
            return;
        };
        el.set_class_name(VIEWER_CLASS);
        let _ = el.set_attribute("url", &url);
        // locked to the contact section, behind its content
        let _ = self
            .section
            .insert_before(&el, self.section.first_child().as_ref());
        dom::set_class(&self.section, READY_CLASS, true);
        log::info!("[scene] mounted viewer");
    }

    fn unmount(&mut self) {
        let Ok(Some(el)) = self.section.query_selector(&format!(".{VIEWER_CLASS}")) else {
            return;
        };
        // keep the scene url for the next mount
        if let Some(url) = el.get_attribute("url") {
            self.url = Some(url);
        }
        el.remove();
        dom::set_class(&self.section, READY_CLASS, false);
        log::info!("[scene] unmounted viewer");
    }
}

pub fn init(document: &web::Document) {
    let Some(section) = document.get_element_by_id(CONTACT_ID) else {
        return;
    };

    // capture the scene url from markup, then hold the element back until
    // the section comes near
    let url = section
        .query_selector(&format!(".{VIEWER_CLASS}"))
        .ok()
        .flatten()
        .map(|el| {
            let url = el.get_attribute("url").or_else(|| el.get_attribute("data-url"));
            el.remove();
            url
        })
        .flatten();

    let manager = Rc::new(RefCell::new(SceneManager {
        section: section.clone(),
        state: SceneOverlay::new(),
        url,
    }));

    match document.get_element_by_id(PROJECTS_ID) {
        Some(projects) => observe_preload(&projects, &manager),
        None => {
            // nothing to anticipate from; load immediately
            let mut m = manager.borrow_mut();
            let cmd = m.state.on_preload();
            m.run(cmd);
        }
    }
    observe_near(&section, &manager);
    wire_anchor_click(document, &manager);
}

/// Start loading the scene well before the preceding section arrives.
fn observe_preload(projects: &web::Element, manager: &Rc<RefCell<SceneManager>>) {
    let manager = manager.clone();
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        if any_intersecting(&entries) {
            let mut m = manager.borrow_mut();
            let cmd = m.state.on_preload();
            m.run(cmd);
        }
    }) as Box<dyn FnMut(_)>);
    observe_with_margin(projects, &closure, PRELOAD_ROOT_MARGIN);
    closure.forget();
}

/// Mount when the contact section is near, unmount when it is far.
fn observe_near(section: &web::Element, manager: &Rc<RefCell<SceneManager>>) {
    let manager = manager.clone();
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            let mut m = manager.borrow_mut();
            let cmd = m.state.on_visibility(entry.is_intersecting());
            m.run(cmd);
        }
    }) as Box<dyn FnMut(_)>);
    observe_with_margin(section, &closure, NEAR_ROOT_MARGIN);
    closure.forget();
}

/// Direct anchor navigation to the contact section begins loading at once.
fn wire_anchor_click(document: &web::Document, manager: &Rc<RefCell<SceneManager>>) {
    let manager = manager.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let is_contact_link = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(r##"a[href="#contact"]"##).ok().flatten())
            .is_some();
        if is_contact_link {
            let mut m = manager.borrow_mut();
            let cmd = m.state.on_preload();
            m.run(cmd);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document
        .add_event_listener_with_callback_and_bool("click", closure.as_ref().unchecked_ref(), true);
    closure.forget();
}

fn any_intersecting(entries: &js_sys::Array) -> bool {
    entries.iter().any(|entry| {
        entry
            .dyn_into::<web::IntersectionObserverEntry>()
            .map(|e| e.is_intersecting())
            .unwrap_or(false)
    })
}

fn observe_with_margin(
    target: &web::Element,
    closure: &Closure<dyn FnMut(js_sys::Array)>,
    root_margin: &str,
) {
    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&JsValue::from_f64(0.0));
    if let Ok(observer) =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
    {
        observer.observe(target);
    }
}
