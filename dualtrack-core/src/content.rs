//! Compiled-in timeline content.
//!
//! Every position here is an anchor on the shared 1-D coordinate line, not a
//! screen pixel. The pan offset is applied on top of these at render time.

use std::collections::HashSet;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    /// Personal history / education (track A).
    Education,
    /// Career (track B).
    Career,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Education, Track::Career];

    pub fn other(self) -> Track {
        match self {
            Track::Education => Track::Career,
            Track::Career => Track::Education,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Track::Education => "education",
            Track::Career => "career",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Milestone {
    pub id: &'static str,
    pub track: Track,
    pub label: &'static str,
    /// Year or year range, shown under the label.
    pub period: &'static str,
    /// First line of the detail block.
    pub headline: &'static str,
    pub details: &'static [&'static str],
    pub anchor_x: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    pub track: Track,
    pub title: &'static str,
    /// Anchor of the hub bubble that stands for the whole track.
    pub hub_x: f64,
    pub milestones: &'static [Milestone],
}

impl TrackLayout {
    /// Anchor of the furthest milestone, or the hub if the track is empty.
    pub fn end_x(&self) -> f64 {
        self.milestones.last().map(|m| m.anchor_x).unwrap_or(self.hub_x)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub content_width: f64,
    pub content_height: f64,
    /// Vertical position of the track paths inside the canvas.
    pub baseline_y: f64,
    pub education: TrackLayout,
    pub career: TrackLayout,
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("content width must be positive, got {0}")]
    EmptyContent(f64),
    #[error("education hub ({education}) must sit left of career hub ({career})")]
    HubOrder { education: f64, career: f64 },
    #[error("anchor {anchor_x} of `{id}` lies outside [0, {content_width}]")]
    OutOfBounds { id: &'static str, anchor_x: f64, content_width: f64 },
    #[error("milestone `{id}` is out of order on the {track:?} track")]
    Unsorted { id: &'static str, track: Track },
    #[error("milestone `{id}` is filed under {actual:?} but listed on {listed:?}")]
    WrongTrack { id: &'static str, actual: Track, listed: Track },
    #[error("duplicate milestone id `{0}`")]
    DuplicateId(&'static str),
}

impl Layout {
    pub fn track(&self, track: Track) -> &TrackLayout {
        match track {
            Track::Education => &self.education,
            Track::Career => &self.career,
        }
    }

    pub fn hub_x(&self, track: Track) -> f64 {
        self.track(track).hub_x
    }

    pub fn milestones(&self) -> impl Iterator<Item = &Milestone> {
        self.education.milestones.iter().chain(self.career.milestones.iter())
    }

    /// Check the invariants the pan engine and renderer rely on.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let w = self.content_width;
        if !(w.is_finite() && w > 0.0) {
            return Err(LayoutError::EmptyContent(w));
        }
        if self.education.hub_x >= self.career.hub_x {
            return Err(LayoutError::HubOrder {
                education: self.education.hub_x,
                career: self.career.hub_x,
            });
        }

        let in_bounds = |x: f64| (0.0..=w).contains(&x);
        let mut seen = HashSet::new();
        for tl in [&self.education, &self.career] {
            if !in_bounds(tl.hub_x) {
                return Err(LayoutError::OutOfBounds {
                    id: tl.track.as_str(),
                    anchor_x: tl.hub_x,
                    content_width: w,
                });
            }
            let mut prev = tl.hub_x;
            for m in tl.milestones {
                if m.track != tl.track {
                    return Err(LayoutError::WrongTrack { id: m.id, actual: m.track, listed: tl.track });
                }
                if !in_bounds(m.anchor_x) {
                    return Err(LayoutError::OutOfBounds { id: m.id, anchor_x: m.anchor_x, content_width: w });
                }
                if m.anchor_x <= prev {
                    return Err(LayoutError::Unsorted { id: m.id, track: tl.track });
                }
                if !seen.insert(m.id) {
                    return Err(LayoutError::DuplicateId(m.id));
                }
                prev = m.anchor_x;
            }
        }
        Ok(())
    }
}

// ── Content ───────────────────────────────────────────────────────────────────

const EDUCATION: &[Milestone] = &[
    Milestone {
        id: "ssc",
        track: Track::Education,
        label: "SSC",
        period: "2017",
        headline: "Percentage: 84.20%",
        details: &["Board: LATUR", "School: Sandeepani Public School, Nanded"],
        anchor_x: 300.0,
    },
    Milestone {
        id: "hsc",
        track: Track::Education,
        label: "HSC",
        period: "2019",
        headline: "Percentage: 54%",
        details: &["Board: LATUR", "College: N.E.S. Science College, Nanded"],
        anchor_x: 500.0,
    },
    Milestone {
        id: "diploma",
        track: Track::Education,
        label: "Diploma",
        period: "2021",
        headline: "Percentage: 82%",
        details: &[
            "Branch: CSE",
            "College: Abha Gaikwad Patil College of Engineering, Nagpur",
            "Board: MSBTE",
        ],
        anchor_x: 700.0,
    },
    Milestone {
        id: "graduation",
        track: Track::Education,
        label: "Graduation",
        period: "2024",
        headline: "CGPA: 8.02",
        details: &[
            "Branch: CSE",
            "College: Tulsiramji Gaikwad Patil College of Engineering and Technology, Nagpur",
            "University: Nagpur University",
        ],
        anchor_x: 900.0,
    },
];

const CAREER: &[Milestone] = &[
    Milestone {
        id: "climex",
        track: Track::Career,
        label: "ClimeX",
        period: "2023",
        headline: "Weather application",
        details: &[
            "Live weather data, geolocation and a 6-day forecast",
            "Stack: JavaScript, HTML5, CSS3, public APIs",
        ],
        anchor_x: 1900.0,
    },
    Milestone {
        id: "social-post",
        track: Track::Career,
        label: "Social Post App",
        period: "2024",
        headline: "Single-page post manager",
        details: &[
            "Post creation, platform filtering and live timestamps",
            "Stack: Angular, TypeScript",
        ],
        anchor_x: 2300.0,
    },
    Milestone {
        id: "taskora",
        track: Track::Career,
        label: "Taskora",
        period: "2024",
        headline: "Full-stack task manager",
        details: &[
            "Authentication, SMS reminders and personal dashboards",
            "Stack: Angular, Spring Boot, MySQL, Twilio",
        ],
        anchor_x: 2700.0,
    },
    Milestone {
        id: "developer",
        track: Track::Career,
        label: "Software Developer",
        period: "2024 – present",
        headline: "Full-stack development",
        details: &["Spring Boot, Angular, TypeScript, MySQL"],
        anchor_x: 3100.0,
    },
];

pub const LAYOUT: Layout = Layout {
    content_width: 3500.0,
    content_height: 320.0,
    baseline_y: 160.0,
    education: TrackLayout {
        track: Track::Education,
        title: "Education",
        hub_x: 100.0,
        milestones: EDUCATION,
    },
    career: TrackLayout {
        track: Track::Career,
        title: "Career",
        hub_x: 1600.0,
        milestones: CAREER,
    },
};
