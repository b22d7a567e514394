use leptos::prelude::*;
use web_sys::PointerEvent;
use dualtrack_core::geometry::{connector_path, track_path, translate_x};
use dualtrack_core::{Element, Track};
use crate::components::hint;
use crate::components::hub::{ExpandedHub, OverviewHub};
use crate::components::milestone::MilestoneIcon;
use crate::components::pointer;
use crate::components::resize;
use crate::state::TimelineState;

fn svg_visibility(shown: bool) -> &'static str {
    if shown { "visible" } else { "hidden" }
}

#[component]
fn Overview() -> impl IntoView {
    let state = expect_context::<TimelineState>();

    view! {
        {move || state.is_visible(Element::OverviewLink).then(|| view! {
            <div class="timeline-overview">
                <OverviewHub track=Track::Education />
                <div class="overview-link"></div>
                <OverviewHub track=Track::Career />
            </div>
        })}
    }
}

#[component]
fn TrackMilestones(track: Track) -> impl IntoView {
    let state = expect_context::<TimelineState>();
    state
        .layout
        .track(track)
        .milestones
        .iter()
        .enumerate()
        .map(|(index, milestone)| view! { <MilestoneIcon milestone=milestone index=index /> })
        .collect_view()
}

/// Pannable canvas: paths, milestones and the expanded hubs.
#[component]
fn ExpandedCanvas() -> impl IntoView {
    let state = expect_context::<TimelineState>();
    let layout = state.layout;
    let svg_w = layout.content_width.to_string();
    let svg_h = layout.content_height.to_string();

    let path_visibility = move |element: Element| move || svg_visibility(state.is_visible(element));

    view! {
        <div
            class="timeline-canvas"
            class:dragging=move || state.is_dragging()
            style:width=format!("{}px", layout.content_width)
            style:height=format!("{}px", layout.content_height)
            style:transform=move || translate_x(state.offset())
            hidden=move || !state.is_visible(Element::ExpandedCanvas)
        >
            <svg class="timeline-svg" width=svg_w height=svg_h>
                <path
                    class="timeline-path education"
                    d=track_path(layout, Track::Education)
                    visibility=path_visibility(Element::TrackPath(Track::Education))
                />
                <path
                    class="timeline-path connector"
                    d=connector_path(layout)
                    visibility=path_visibility(Element::Connector)
                />
                <path
                    class="timeline-path career"
                    d=track_path(layout, Track::Career)
                    visibility=path_visibility(Element::TrackPath(Track::Career))
                />
            </svg>
            <ExpandedHub track=Track::Education />
            <ExpandedHub track=Track::Career />
            <TrackMilestones track=Track::Education />
            <TrackMilestones track=Track::Career />
        </div>
    }
}

#[component]
pub fn Timeline() -> impl IntoView {
    let state = expect_context::<TimelineState>();
    let viewport_ref = NodeRef::<leptos::html::Div>::new();

    let measure = move || {
        let Some(el) = viewport_ref.get_untracked() else { return };
        state.resize(el.client_width() as f64);
    };

    // First measurement once the viewport is in the document, then on every
    // change of its own box
    Effect::new(move || {
        if let Some(el) = viewport_ref.get() {
            measure();
            resize::observe(&el, measure);
        }
    });

    // Covers browsers without ResizeObserver
    let resize_handle = window_event_listener(leptos::ev::resize, move |_| measure());

    on_cleanup(move || {
        resize_handle.remove();
        resize::disconnect();
        pointer::release();
        hint::cancel_pending();
    });

    let on_pointerdown = move |ev: PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        if state.pan.with_untracked(|p| p.bounds().is_none()) {
            measure();
        }
        if state.begin_drag(ev.client_x() as f64) {
            pointer::acquire(state, ev.pointer_id());
        }
    };

    let on_pointerleave = move |ev: PointerEvent| {
        let dragging = state.pan.with_untracked(|p| p.is_dragging());
        if dragging && pointer::is_tracking(ev.pointer_id()) {
            pointer::finish(&state);
        }
    };

    view! {
        <div
            class="timeline-viewport"
            node_ref=viewport_ref
            on:pointerdown=on_pointerdown
            on:pointerleave=on_pointerleave
        >
            <Overview />
            <ExpandedCanvas />
        </div>
    }
}
