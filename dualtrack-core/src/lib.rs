//! Browser-free core of the dualtrack timeline widget: content, the view-state
//! machine, visibility derivation, and the pan/drag engine.

pub mod config;
pub mod content;
pub mod geometry;
pub mod hint;
pub mod mode;
pub mod pan;
pub mod visibility;

pub use config::TimelineConfig;
pub use content::{Layout, LayoutError, Milestone, Track, TrackLayout, LAYOUT};
pub use hint::{HintState, HintToken};
pub use mode::{hub_action, HubAction, Mode, Trigger};
pub use pan::{target_offset, Bounds, Gesture, PanEngine};
pub use visibility::{visible, Element};
