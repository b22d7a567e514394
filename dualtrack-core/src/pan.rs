//! Horizontal pan offset of the timeline canvas.
//!
//! The offset is the translation applied to the shared coordinate line, so it
//! is always `<= 0`: panning right reveals content further along the line.
//! Viewport and content widths are injected through [`PanEngine::resize`]
//! instead of being read from the DOM, which keeps everything here pure.

use crate::config::TimelineConfig;
use crate::content::{Layout, Track};
use crate::mode::Mode;

/// Measured dimensions. Only constructible once the viewport has a width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    viewport_width: f64,
    content_width: f64,
}

impl Bounds {
    /// `None` until the viewport has a measurable, positive width.
    pub fn new(viewport_width: f64, content_width: f64) -> Option<Self> {
        let measurable = viewport_width.is_finite() && viewport_width > 0.0;
        if !measurable || !content_width.is_finite() {
            return None;
        }
        Some(Self { viewport_width, content_width: content_width.max(0.0) })
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Most negative allowed offset. Zero when the content fits the viewport.
    pub fn min_offset(&self) -> f64 {
        (self.viewport_width - self.content_width).min(0.0)
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.min_offset(), 0.0)
    }

    /// The `[start, end)` slice of the coordinate line visible at `offset`.
    pub fn visible_window(&self, offset: f64) -> (f64, f64) {
        (-offset, self.viewport_width - offset)
    }
}

/// Unclamped offset that centers the content relevant to `mode`.
pub fn target_offset(mode: Mode, layout: &Layout, viewport_width: f64) -> f64 {
    let center = viewport_width / 2.0;
    match mode {
        Mode::Overview => 0.0,
        Mode::Education => center - layout.hub_x(Track::Education),
        Mode::Career => center - layout.hub_x(Track::Career),
        Mode::Combined => {
            center - (layout.hub_x(Track::Education) + layout.hub_x(Track::Career)) / 2.0
        }
    }
}

/// How a finished pointer interaction is classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Drag,
}

/// Snapshot taken when a drag begins.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragGesture {
    origin_x: f64,
    start_offset: f64,
    /// Largest |pointer - origin| seen so far.
    max_travel: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEngine {
    offset: f64,
    bounds: Option<Bounds>,
    drag: Option<DragGesture>,
    drag_threshold: f64,
}

impl PanEngine {
    pub fn new(config: &TimelineConfig) -> Self {
        Self {
            offset: 0.0,
            bounds: None,
            drag: None,
            drag_threshold: config.drag_threshold_px,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Recompute bounds from fresh measurements and re-clamp the offset.
    /// An unmeasurable viewport keeps the previous bounds and offset.
    pub fn resize(&mut self, viewport_width: f64, content_width: f64) {
        let Some(bounds) = Bounds::new(viewport_width, content_width) else {
            log::debug!("pan: ignoring unmeasurable viewport width {viewport_width}");
            return;
        };
        self.bounds = Some(bounds);
        self.offset = bounds.clamp(self.offset);
        self.check();
    }

    /// Jump to the centered offset for `mode`. Any drag in progress is dropped.
    pub fn snap_to(&mut self, mode: Mode, layout: &Layout) {
        self.drag = None;
        if mode == Mode::Overview {
            self.offset = 0.0;
            return;
        }
        let Some(bounds) = self.bounds else {
            return;
        };
        self.offset = bounds.clamp(target_offset(mode, layout, bounds.viewport_width));
        log::debug!("pan: snapped to {:.1} for {}", self.offset, mode.as_str());
        self.check();
    }

    /// Start a drag at `pointer_x`. Refused in the overview, before the
    /// viewport has been measured, and while another drag is still active.
    pub fn begin_drag(&mut self, mode: Mode, pointer_x: f64) -> bool {
        if !mode.is_expanded() || self.bounds.is_none() || self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragGesture {
            origin_x: pointer_x,
            start_offset: self.offset,
            max_travel: 0.0,
        });
        true
    }

    /// Move the active drag. The offset is always recomputed from the captured
    /// origin, never accumulated across events.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<f64> {
        let bounds = self.bounds?;
        let drag = self.drag.as_mut()?;
        let delta = pointer_x - drag.origin_x;
        drag.max_travel = drag.max_travel.max(delta.abs());
        self.offset = bounds.clamp(drag.start_offset + delta);
        self.check();
        Some(self.offset)
    }

    /// Finish the active drag, leaving the last clamped offset in place.
    pub fn end_drag(&mut self) -> Option<Gesture> {
        let drag = self.drag.take()?;
        let gesture = if drag.max_travel > self.drag_threshold {
            Gesture::Drag
        } else {
            Gesture::Tap
        };
        log::debug!("pan: {gesture:?} ended at {:.1}", self.offset);
        Some(gesture)
    }

    /// Abandon the active drag without classifying it. The offset stays where
    /// the last move left it.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Travel of the active drag so far, if any.
    pub fn drag_travel(&self) -> Option<f64> {
        self.drag.map(|d| d.max_travel)
    }

    pub fn exceeds_threshold(&self, travel: f64) -> bool {
        travel > self.drag_threshold
    }

    fn check(&self) {
        if let Some(b) = self.bounds {
            debug_assert!(
                b.min_offset() <= self.offset && self.offset <= 0.0,
                "offset {} outside [{}, 0]",
                self.offset,
                b.min_offset()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LAYOUT;

    fn engine(viewport: f64) -> PanEngine {
        let mut p = PanEngine::new(&TimelineConfig::DEFAULT);
        p.resize(viewport, LAYOUT.content_width);
        p
    }

    #[test]
    fn test_min_offset() {
        let b = Bounds::new(800.0, 3500.0).unwrap();
        assert_eq!(b.min_offset(), -2700.0);
    }

    #[test]
    fn test_narrow_content_pins_to_zero() {
        let b = Bounds::new(1200.0, 900.0).unwrap();
        assert_eq!(b.min_offset(), 0.0);
        assert_eq!(b.clamp(-50.0), 0.0);
        assert_eq!(b.clamp(50.0), 0.0);
    }

    #[test]
    fn test_unmeasured_viewport() {
        assert!(Bounds::new(0.0, 3500.0).is_none());
        assert!(Bounds::new(f64::NAN, 3500.0).is_none());

        let mut p = PanEngine::new(&TimelineConfig::DEFAULT);
        p.snap_to(Mode::Career, &LAYOUT);
        assert_eq!(p.offset(), 0.0);
        assert!(!p.begin_drag(Mode::Career, 10.0));
    }

    #[test]
    fn test_snap_scenario() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Education, &LAYOUT);
        assert_eq!(p.offset(), 0.0);
        p.snap_to(Mode::Career, &LAYOUT);
        assert_eq!(p.offset(), -1200.0);
        p.snap_to(Mode::Combined, &LAYOUT);
        assert_eq!(p.offset(), -450.0);
        p.snap_to(Mode::Overview, &LAYOUT);
        assert_eq!(p.offset(), 0.0);
    }

    #[test]
    fn test_raw_targets() {
        assert_eq!(target_offset(Mode::Education, &LAYOUT, 800.0), 300.0);
        assert_eq!(target_offset(Mode::Career, &LAYOUT, 800.0), -1200.0);
        assert_eq!(target_offset(Mode::Combined, &LAYOUT, 800.0), -450.0);
    }

    #[test]
    fn test_drag_pins_at_right_edge() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Career, &LAYOUT);
        assert!(p.begin_drag(Mode::Career, 1000.0));
        assert_eq!(p.drag_to(-1000.0), Some(-2700.0));
        assert_eq!(p.end_drag(), Some(Gesture::Drag));
        assert_eq!(p.offset(), -2700.0);
    }

    #[test]
    fn test_drag_is_absolute_not_incremental() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Career, &LAYOUT);
        p.begin_drag(Mode::Career, 400.0);
        p.drag_to(430.0);
        p.drag_to(470.0);
        p.drag_to(450.0);
        assert_eq!(p.offset(), -1150.0);
    }

    #[test]
    fn test_no_drag_in_overview() {
        let mut p = engine(800.0);
        assert!(!p.begin_drag(Mode::Overview, 100.0));
        assert_eq!(p.drag_to(300.0), None);
        assert_eq!(p.end_drag(), None);
        assert_eq!(p.offset(), 0.0);
    }

    #[test]
    fn test_small_travel_is_a_tap() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Combined, &LAYOUT);
        p.begin_drag(Mode::Combined, 200.0);
        p.drag_to(203.0);
        p.drag_to(198.0);
        assert_eq!(p.end_drag(), Some(Gesture::Tap));
    }

    #[test]
    fn test_travel_counts_the_furthest_point() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Combined, &LAYOUT);
        p.begin_drag(Mode::Combined, 200.0);
        p.drag_to(240.0);
        p.drag_to(201.0);
        assert_eq!(p.end_drag(), Some(Gesture::Drag));
    }

    #[test]
    fn test_resize_reclamps() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Career, &LAYOUT);
        p.begin_drag(Mode::Career, 0.0);
        p.drag_to(-5000.0);
        p.end_drag();
        assert_eq!(p.offset(), -2700.0);
        p.resize(2000.0, LAYOUT.content_width);
        assert_eq!(p.offset(), -1500.0);
        p.resize(4000.0, LAYOUT.content_width);
        assert_eq!(p.offset(), 0.0);
    }

    #[test]
    fn test_mode_change_drops_drag() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Career, &LAYOUT);
        p.begin_drag(Mode::Career, 0.0);
        p.snap_to(Mode::Combined, &LAYOUT);
        assert!(!p.is_dragging());
        assert_eq!(p.drag_to(100.0), None);
    }

    #[test]
    fn test_cancel_keeps_offset() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Career, &LAYOUT);
        p.begin_drag(Mode::Career, 0.0);
        p.drag_to(100.0);
        p.cancel_drag();
        assert!(!p.is_dragging());
        assert_eq!(p.end_drag(), None);
        assert_eq!(p.offset(), -1100.0);
    }

    #[test]
    fn test_second_begin_keeps_first_origin() {
        let mut p = engine(800.0);
        p.snap_to(Mode::Career, &LAYOUT);
        assert!(p.begin_drag(Mode::Career, 100.0));
        p.drag_to(150.0);
        assert_eq!(p.offset(), -1150.0);
        assert!(!p.begin_drag(Mode::Career, 500.0));
        assert_eq!(p.drag_to(160.0), Some(-1140.0));
        p.end_drag();
        assert!(p.begin_drag(Mode::Career, 500.0));
    }

    #[test]
    fn test_visible_window() {
        let b = Bounds::new(800.0, 3500.0).unwrap();
        assert_eq!(b.visible_window(-1200.0), (1200.0, 2000.0));
    }
}
