use leptos::prelude::*;
use dualtrack_core::{TimelineConfig, LAYOUT};
use crate::components::hint::PanHint;
use crate::components::timeline::Timeline;
use crate::state::TimelineState;

#[component]
pub fn App() -> impl IntoView {
    let state = TimelineState::new(&LAYOUT, TimelineConfig::DEFAULT);
    provide_context(state);

    view! {
        <div class="timeline-container" data-mode=move || state.mode.get().as_str()>
            <div class="timeline-heading">
                <h2 class="timeline-title">"Timeline"</h2>
            </div>
            <Timeline />
            <PanHint />
        </div>
    }
}
