//! Drag-pannable two-track timeline widget, mounted into a host page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod components;
pub mod state;

use components::app::App;

/// Id of the element the host page provides for the widget.
pub const MOUNT_ID: &str = "timeline";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    mount();
}

fn mount() {
    if let Err(e) = dualtrack_core::LAYOUT.validate() {
        log::error!("Timeline content is invalid: {}", e);
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document object");
        return;
    };
    let Some(el) = document.get_element_by_id(MOUNT_ID) else {
        log::error!("Mount point #{} not found", MOUNT_ID);
        return;
    };
    let Ok(parent) = el.dyn_into::<web_sys::HtmlElement>() else {
        log::error!("Mount point #{} is not an HTML element", MOUNT_ID);
        return;
    };
    leptos::mount::mount_to(parent, App).forget();
    log::info!("Timeline mounted into #{}", MOUNT_ID);
}
