use crate::content::Track;
use crate::mode::Mode;

/// Every independently shown piece of the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// Collapsed bubble in the overview.
    OverviewHub(Track),
    /// Line joining the two collapsed bubbles.
    OverviewLink,
    /// Pannable canvas holding paths, milestones and expanded hubs.
    ExpandedCanvas,
    ExpandedHub(Track),
    TrackPath(Track),
    Milestone(Track),
    /// Path segment bridging the two tracks.
    Connector,
}

impl Element {
    pub const ALL: [Element; 11] = [
        Element::OverviewHub(Track::Education),
        Element::OverviewHub(Track::Career),
        Element::OverviewLink,
        Element::ExpandedCanvas,
        Element::ExpandedHub(Track::Education),
        Element::ExpandedHub(Track::Career),
        Element::TrackPath(Track::Education),
        Element::TrackPath(Track::Career),
        Element::Milestone(Track::Education),
        Element::Milestone(Track::Career),
        Element::Connector,
    ];
}

/// Pure visibility derivation. Query it on every render.
pub fn visible(element: Element, mode: Mode) -> bool {
    match element {
        Element::OverviewHub(_) | Element::OverviewLink => mode == Mode::Overview,
        Element::ExpandedCanvas | Element::ExpandedHub(_) | Element::Connector => mode.is_expanded(),
        Element::TrackPath(t) | Element::Milestone(t) => mode.shows(t),
    }
}
