//! Document-level pointer listeners for an in-progress drag.
//!
//! The viewport owns the gesture, but moves and releases are tracked on the
//! document so they still arrive when the pointer is over a child element or
//! is released outside the widget. Leaving the viewport ends the drag (see
//! `Timeline`). Listeners exist only between drag-start and drag-end and
//! follow the single pointer that started the drag.

use std::cell::RefCell;
use leptos::prelude::Set;
use dualtrack_core::Gesture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, PointerEvent};
use crate::components::timer;
use crate::state::TimelineState;

thread_local! {
    static DRAG_LISTENERS: RefCell<Option<DragListeners>> = RefCell::new(None);
}

const MOVE_EVENTS: &[&str] = &["pointermove"];
const END_EVENTS: &[&str] = &["pointerup", "pointercancel"];

pub struct DragListeners {
    document: Document,
    pointer_id: i32,
    on_move: Closure<dyn FnMut(PointerEvent)>,
    on_end: Closure<dyn FnMut(PointerEvent)>,
}

impl DragListeners {
    fn attach(state: TimelineState, pointer_id: i32) -> Option<Self> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document; cannot track drag");
            return None;
        };

        let on_move = Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
            if ev.pointer_id() == pointer_id {
                state.drag_to(ev.client_x() as f64);
            }
        });
        let on_end = Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
            if ev.pointer_id() == pointer_id {
                finish(&state);
            }
        });

        let listeners = Self { document, pointer_id, on_move, on_end };
        for (events, cb) in [(MOVE_EVENTS, &listeners.on_move), (END_EVENTS, &listeners.on_end)] {
            for &name in events {
                if let Err(e) = listeners
                    .document
                    .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                {
                    log::error!("Failed to add {} listener: {:?}", name, e);
                    return None;
                }
            }
        }
        Some(listeners)
    }

    fn detach(&self) {
        for (events, cb) in [(MOVE_EVENTS, &self.on_move), (END_EVENTS, &self.on_end)] {
            for &name in events {
                let _ = self
                    .document
                    .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
            }
        }
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Start tracking a drag that `state` has already accepted for `pointer_id`.
pub fn acquire(state: TimelineState, pointer_id: i32) {
    let Some(listeners) = DragListeners::attach(state, pointer_id) else {
        state.cancel_drag();
        return;
    };
    // Replacing the slot drops the previous, already-detached guard.
    let prev = DRAG_LISTENERS.with(|slot| slot.borrow_mut().replace(listeners));
    drop(prev);
}

/// Whether the drag in progress belongs to `pointer_id`.
pub fn is_tracking(pointer_id: i32) -> bool {
    DRAG_LISTENERS.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|listeners| listeners.pointer_id == pointer_id)
    })
}

/// End the drag on release or pointer-leave.
///
/// Only detaches: this can run inside one of the guard's own callbacks, so the
/// guard is dropped later by [`acquire`] or [`release`].
pub fn finish(state: &TimelineState) {
    DRAG_LISTENERS.with(|slot| {
        if let Some(listeners) = slot.borrow().as_ref() {
            listeners.detach();
        }
    });
    if state.end_drag() == Some(Gesture::Drag) {
        // The click (if any) is dispatched right after pointerup, before timers.
        let suppress = state.suppress_click;
        timer::schedule(0, move || {
            suppress.try_set(false);
        });
    }
}

/// Drop any guard. Called when the widget unmounts.
pub fn release() {
    let prev = DRAG_LISTENERS.with(|slot| slot.borrow_mut().take());
    drop(prev);
}
