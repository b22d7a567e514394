//! One-shot `setTimeout` helpers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run `f` once after `delay_ms`. Returns the timeout id for [`cancel`].
pub fn schedule(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let Some(win) = web_sys::window() else {
        log::warn!("No window object; timer dropped");
        return None;
    };
    let cb = Closure::once_into_js(f);
    match win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref::<js_sys::Function>(),
        delay_ms,
    ) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("setTimeout failed: {:?}", e);
            None
        }
    }
}

pub fn cancel(id: i32) {
    if let Some(win) = web_sys::window() {
        win.clear_timeout_with_handle(id);
    }
}
