use leptos::prelude::*;
use dualtrack_core::{hub_action, Element, Track, Trigger};
use crate::components::hint;
use crate::state::TimelineState;

/// Route a hub click through the state machine and arm the hint timer.
pub fn activate(state: TimelineState, trigger: Trigger) {
    if let Some(token) = state.activate(trigger) {
        hint::schedule_hide(state, token);
    }
}

fn hub_title(state: TimelineState, trigger: Trigger, track_title: &'static str) -> String {
    hub_action(state.mode.get(), trigger)
        .map(|a| a.title(track_title))
        .unwrap_or_default()
}

/// Collapsed bubble shown in the overview.
#[component]
pub fn OverviewHub(track: Track) -> impl IntoView {
    let state = expect_context::<TimelineState>();
    let tl = state.layout.track(track);
    let trigger = Trigger::OverviewHub(track);

    view! {
        <button
            class=format!("timeline-hub overview-hub {}", track.as_str())
            title=move || hub_title(state, trigger, tl.title)
            on:click=move |_| activate(state, trigger)
        >
            <span class="timeline-label">{tl.title}</span>
        </button>
    }
}

/// The same hub, placed inline on the expanded canvas at its anchor.
#[component]
pub fn ExpandedHub(track: Track) -> impl IntoView {
    let state = expect_context::<TimelineState>();
    let tl = state.layout.track(track);
    let trigger = Trigger::ExpandedHub(track);
    let position = format!("left: {}px; top: {}px;", tl.hub_x, state.layout.baseline_y);

    view! {
        <button
            class=move || {
                let active = if state.mode.get().shows(track) { " active" } else { "" };
                format!("timeline-hub expanded-hub {}{}", track.as_str(), active)
            }
            style=position
            hidden=move || !state.is_visible(Element::ExpandedHub(track))
            title=move || hub_title(state, trigger, tl.title)
            on:click=move |_| activate(state, trigger)
        >
            <span class="timeline-label">{tl.title}</span>
        </button>
    }
}
