#![cfg(target_arch = "wasm32")]
//! Browser entry point: wires each scroll-driven effect to the page.
//!
//! Every effect is optional page structure; when its elements are missing
//! the wiring exits without effect or diagnostics.

mod carousel;
mod dom;
mod rotator;
mod scene;
mod scheduler;
mod smooth_scroll;
mod stack;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollfx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    rotator::init(&document);
    stack::init(&document);
    carousel::init(&document);
    smooth_scroll::init(&document);
    scene::init(&document);

    Ok(())
}
