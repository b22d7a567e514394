use std::cell::Cell;
use leptos::prelude::*;
use dualtrack_core::HintToken;
use crate::components::timer;
use crate::state::TimelineState;

thread_local! {
    /// The single pending hide timer, if any.
    static HINT_TIMER: Cell<Option<i32>> = const { Cell::new(None) };
}

/// Schedule the hide for a fresh hint, superseding any earlier timer.
pub fn schedule_hide(state: TimelineState, token: HintToken) {
    let delay = i32::try_from(state.config.hint_duration_ms).unwrap_or(i32::MAX);
    let id = timer::schedule(delay, move || state.expire_hint(token));
    if let Some(prev) = HINT_TIMER.with(|t| t.replace(id)) {
        timer::cancel(prev);
    }
}

pub fn cancel_pending() {
    if let Some(id) = HINT_TIMER.with(|t| t.take()) {
        timer::cancel(id);
    }
}

#[component]
pub fn PanHint() -> impl IntoView {
    let state = expect_context::<TimelineState>();
    let message = state.config.hint_message;

    view! {
        {move || state.hint.with(|h| h.is_visible()).then(|| view! {
            <div class="timeline-hint" role="status">{message}</div>
        })}
    }
}
