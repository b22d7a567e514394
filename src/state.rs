use leptos::prelude::*;
use dualtrack_core::{
    visible, Element, Gesture, HintState, HintToken, Layout, Mode, PanEngine, TimelineConfig,
    Trigger,
};

/// Reactive container for the widget. All writes go through its methods so the
/// mode, the pan offset and the hint stay in step.
#[derive(Clone, Copy)]
pub struct TimelineState {
    pub layout: &'static Layout,
    pub config: TimelineConfig,
    pub mode: RwSignal<Mode>,
    pub pan: RwSignal<PanEngine>,
    pub hint: RwSignal<HintState>,
    /// Set when a drag ends so the click the browser fires afterwards is swallowed.
    pub suppress_click: RwSignal<bool>,
}

impl TimelineState {
    pub fn new(layout: &'static Layout, config: TimelineConfig) -> Self {
        Self {
            layout,
            config,
            mode: RwSignal::new(Mode::Overview),
            pan: RwSignal::new(PanEngine::new(&config)),
            hint: RwSignal::new(HintState::default()),
            suppress_click: RwSignal::new(false),
        }
    }

    // ── Derived (tracked) ────────────────────────────────────────────────────

    pub fn is_visible(&self, element: Element) -> bool {
        visible(element, self.mode.get())
    }

    pub fn offset(&self) -> f64 {
        self.pan.with(|p| p.offset())
    }

    pub fn is_dragging(&self) -> bool {
        self.pan.with(|p| p.is_dragging())
    }

    // ── Mutations ────────────────────────────────────────────────────────────

    /// Handle a hub click. Returns a hint token when the hint was (re)shown, so
    /// the caller can schedule its hide.
    pub fn activate(&self, trigger: Trigger) -> Option<HintToken> {
        if self.suppress_click.get_untracked() {
            self.suppress_click.set(false);
            log::debug!("click after drag ignored: {trigger:?}");
            return None;
        }
        let current = self.mode.get_untracked();
        let next = current.next(trigger);
        if next == current {
            return None;
        }
        log::debug!("mode: {} -> {}", current.as_str(), next.as_str());

        let layout = self.layout;
        self.mode.set(next);
        self.pan.update(|p| p.snap_to(next, layout));
        if next.is_expanded() {
            self.hint.try_update(HintState::show)
        } else {
            self.hint.update(HintState::dismiss);
            None
        }
    }

    /// New viewport measurement. The first usable one also applies the snap
    /// that could not be computed before a width was known.
    pub fn resize(&self, viewport_width: f64) {
        let mode = self.mode.get_untracked();
        let layout = self.layout;
        self.pan.update(|p| {
            let first = p.bounds().is_none();
            p.resize(viewport_width, layout.content_width);
            if first && p.bounds().is_some() {
                p.snap_to(mode, layout);
            }
        });
    }

    pub fn begin_drag(&self, pointer_x: f64) -> bool {
        self.suppress_click.set(false);
        let mode = self.mode.get_untracked();
        self.pan.try_update(|p| p.begin_drag(mode, pointer_x)).unwrap_or(false)
    }

    pub fn drag_to(&self, pointer_x: f64) {
        let moved = self.pan.try_update(|p| {
            p.drag_to(pointer_x);
            p.drag_travel().is_some_and(|t| p.exceeds_threshold(t))
        });
        if moved == Some(true) && self.hint.with_untracked(HintState::is_visible) {
            self.hint.update(HintState::dismiss);
        }
    }

    pub fn end_drag(&self) -> Option<Gesture> {
        let gesture = self.pan.try_update(|p| p.end_drag()).flatten();
        if gesture == Some(Gesture::Drag) {
            self.suppress_click.try_set(true);
        }
        gesture
    }

    pub fn cancel_drag(&self) {
        self.pan.try_update(PanEngine::cancel_drag);
    }

    pub fn expire_hint(&self, token: HintToken) {
        self.hint.try_update(|h| h.expire(token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualtrack_core::{Track, LAYOUT};

    fn with_state(f: impl FnOnce(TimelineState)) {
        let owner = Owner::new();
        owner.with(|| f(TimelineState::new(&LAYOUT, TimelineConfig::DEFAULT)));
    }

    #[test]
    fn test_activate_snaps_and_shows_hint() {
        with_state(|state| {
            state.resize(800.0);
            let token = state.activate(Trigger::OverviewHub(Track::Career));
            assert!(token.is_some());
            assert_eq!(state.mode.get_untracked(), Mode::Career);
            assert_eq!(state.pan.get_untracked().offset(), -1200.0);
            assert!(state.hint.get_untracked().is_visible());

            state.activate(Trigger::ExpandedHub(Track::Career));
            assert_eq!(state.mode.get_untracked(), Mode::Overview);
            assert_eq!(state.pan.get_untracked().offset(), 0.0);
            assert!(!state.hint.get_untracked().is_visible());
        });
    }

    #[test]
    fn test_first_measurement_applies_pending_snap() {
        with_state(|state| {
            state.activate(Trigger::OverviewHub(Track::Career));
            assert_eq!(state.pan.get_untracked().offset(), 0.0);
            state.resize(0.0);
            assert_eq!(state.pan.get_untracked().offset(), 0.0);
            state.resize(800.0);
            assert_eq!(state.pan.get_untracked().offset(), -1200.0);
        });
    }

    #[test]
    fn test_drag_swallows_following_click() {
        with_state(|state| {
            state.resize(800.0);
            state.activate(Trigger::OverviewHub(Track::Education));
            assert!(state.begin_drag(300.0));
            state.drag_to(100.0);
            assert!(!state.hint.get_untracked().is_visible());
            assert_eq!(state.end_drag(), Some(Gesture::Drag));

            assert!(state.activate(Trigger::ExpandedHub(Track::Career)).is_none());
            assert_eq!(state.mode.get_untracked(), Mode::Education);

            state.activate(Trigger::ExpandedHub(Track::Career));
            assert_eq!(state.mode.get_untracked(), Mode::Combined);
        });
    }

    #[test]
    fn test_tap_does_not_swallow_click() {
        with_state(|state| {
            state.resize(800.0);
            state.activate(Trigger::OverviewHub(Track::Education));
            assert!(state.begin_drag(300.0));
            state.drag_to(302.0);
            assert_eq!(state.end_drag(), Some(Gesture::Tap));
            assert!(state.hint.get_untracked().is_visible());

            state.activate(Trigger::ExpandedHub(Track::Education));
            assert_eq!(state.mode.get_untracked(), Mode::Overview);
        });
    }

    #[test]
    fn test_late_measurement_makes_canvas_pannable() {
        with_state(|state| {
            state.resize(0.0);
            state.activate(Trigger::OverviewHub(Track::Career));
            assert_eq!(state.pan.get_untracked().offset(), 0.0);
            assert!(!state.begin_drag(500.0));

            state.resize(800.0);
            assert_eq!(state.pan.get_untracked().offset(), -1200.0);
            assert!(state.begin_drag(500.0));
            state.drag_to(400.0);
            assert_eq!(state.end_drag(), Some(Gesture::Drag));
            assert_eq!(state.pan.get_untracked().offset(), -1300.0);
        });
    }

    #[test]
    fn test_second_pointer_cannot_restart_drag() {
        with_state(|state| {
            state.resize(800.0);
            state.activate(Trigger::OverviewHub(Track::Career));
            assert!(state.begin_drag(100.0));
            state.drag_to(150.0);
            assert!(!state.begin_drag(500.0));
            state.drag_to(160.0);
            assert_eq!(state.pan.get_untracked().offset(), -1140.0);
            assert!(state.pan.get_untracked().is_dragging());
        });
    }

    #[test]
    fn test_stale_hint_token() {
        with_state(|state| {
            state.resize(800.0);
            let first = state.activate(Trigger::OverviewHub(Track::Education)).unwrap();
            let second = state.activate(Trigger::ExpandedHub(Track::Career)).unwrap();
            state.expire_hint(first);
            assert!(state.hint.get_untracked().is_visible());
            state.expire_hint(second);
            assert!(!state.hint.get_untracked().is_visible());
        });
    }
}
