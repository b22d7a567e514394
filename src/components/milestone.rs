use leptos::prelude::*;
use dualtrack_core::geometry::lane_y;
use dualtrack_core::{Element, Milestone};
use crate::state::TimelineState;

/// Icon, label and hover detail block for one milestone.
#[component]
pub fn MilestoneIcon(milestone: &'static Milestone, index: usize) -> impl IntoView {
    let state = expect_context::<TimelineState>();
    let track = milestone.track;
    let position = format!(
        "left: {}px; top: {}px;",
        milestone.anchor_x,
        lane_y(index, state.layout.baseline_y),
    );

    view! {
        <div
            class=format!("timeline-icon {}", track.as_str())
            style=position
            data-id=milestone.id
            tabindex="0"
            hidden=move || !state.is_visible(Element::Milestone(track))
        >
            <span class="timeline-label">{milestone.label}</span>
            <span class="timeline-year">{milestone.period}</span>
            <div class="timeline-tooltip">
                <h3>{milestone.headline}</h3>
                {milestone.details.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
            </div>
        </div>
    }
}
