/// Compiled-in widget settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineConfig {
    /// Pointer travel (px) above which a press counts as a drag, not a tap.
    pub drag_threshold_px: f64,
    /// How long the pan hint stays up after expanding.
    pub hint_duration_ms: u32,
    pub hint_message: &'static str,
}

impl TimelineConfig {
    pub const DEFAULT: TimelineConfig = TimelineConfig {
        drag_threshold_px: 5.0,
        hint_duration_ms: 4000,
        hint_message: "Drag to explore the timeline",
    };
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
