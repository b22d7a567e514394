//! View-state machine.
//!
//! `Mode` is the single source of truth for what the widget shows. Every
//! visibility decision and every snap target is derived from it.

use crate::content::Track;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Two collapsed hubs joined by a line.
    #[default]
    Overview,
    /// Expanded canvas focused on the education track (track A).
    Education,
    /// Expanded canvas focused on the career track (track B).
    Career,
    /// Expanded canvas with both tracks.
    Combined,
}

/// A hub activation. The same logical hub is rendered twice: collapsed in the
/// overview and inline on the expanded canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    OverviewHub(Track),
    ExpandedHub(Track),
}

/// What activating a hub would do, used for its title text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HubAction {
    Expand,
    Collapse,
    Add,
    Remove,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Overview, Mode::Education, Mode::Career, Mode::Combined];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Overview => "overview",
            Mode::Education => "education",
            Mode::Career => "career",
            Mode::Combined => "combined",
        }
    }

    pub fn is_expanded(self) -> bool {
        self != Mode::Overview
    }

    /// Whether `track`'s milestones are on screen.
    pub fn shows(self, track: Track) -> bool {
        match (self, track) {
            (Mode::Combined, _) => true,
            (Mode::Education, Track::Education) | (Mode::Career, Track::Career) => true,
            _ => false,
        }
    }

    /// The mode focused on a single track.
    pub fn single(track: Track) -> Mode {
        match track {
            Track::Education => Mode::Education,
            Track::Career => Mode::Career,
        }
    }

    /// Apply a trigger. Triggers on hubs that are hidden in the current mode
    /// leave the mode unchanged.
    pub fn next(self, trigger: Trigger) -> Mode {
        match (self, trigger) {
            (Mode::Overview, Trigger::OverviewHub(t)) => Mode::single(t),
            (Mode::Overview, Trigger::ExpandedHub(_)) => self,
            (_, Trigger::OverviewHub(_)) => self,

            // Peel the activated track off, or collapse if it was the only one.
            (Mode::Combined, Trigger::ExpandedHub(t)) => Mode::single(t.other()),
            (m, Trigger::ExpandedHub(t)) if m.shows(t) => Mode::Overview,
            (_, Trigger::ExpandedHub(_)) => Mode::Combined,
        }
    }
}

/// The action a hub of `track` performs in `mode`, or `None` when that hub is
/// not on screen.
pub fn hub_action(mode: Mode, trigger: Trigger) -> Option<HubAction> {
    match (mode, trigger) {
        (Mode::Overview, Trigger::OverviewHub(_)) => Some(HubAction::Expand),
        (Mode::Overview, Trigger::ExpandedHub(_)) | (_, Trigger::OverviewHub(_)) => None,
        (Mode::Combined, Trigger::ExpandedHub(_)) => Some(HubAction::Remove),
        (m, Trigger::ExpandedHub(t)) if m.shows(t) => Some(HubAction::Collapse),
        (_, Trigger::ExpandedHub(_)) => Some(HubAction::Add),
    }
}

impl HubAction {
    pub fn title(self, track_title: &str) -> String {
        match self {
            HubAction::Expand => format!("Show {track_title}"),
            HubAction::Collapse => "Back to overview".to_string(),
            HubAction::Add => format!("Add {track_title}"),
            HubAction::Remove => format!("Hide {track_title}"),
        }
    }
}
