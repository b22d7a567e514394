//! Re-measures the viewport whenever its own box changes size, including a
//! container that is revealed after mounting with no window resize.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::ResizeObserver;

thread_local! {
    static VIEWPORT_OBSERVER: RefCell<Option<ViewportObserver>> = RefCell::new(None);
}

struct ViewportObserver {
    observer: ResizeObserver,
    _on_resize: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_resize` every time `target` changes size. Replaces any previous
/// observer. Returns `false` when the browser has no `ResizeObserver`.
pub fn observe(target: &web_sys::Element, on_resize: impl Fn() + 'static) -> bool {
    let on_resize = Closure::<dyn FnMut(js_sys::Array)>::new(move |_: js_sys::Array| on_resize());
    let observer = match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("ResizeObserver unavailable: {:?}", e);
            return false;
        }
    };
    observer.observe(target);
    let prev = VIEWPORT_OBSERVER.with(|slot| {
        slot.borrow_mut().replace(ViewportObserver { observer, _on_resize: on_resize })
    });
    drop(prev);
    true
}

/// Stop observing. Called when the widget unmounts.
pub fn disconnect() {
    let prev = VIEWPORT_OBSERVER.with(|slot| slot.borrow_mut().take());
    drop(prev);
}
