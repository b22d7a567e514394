//! Coordinate helpers shared by the renderer.

use crate::content::{Layout, Track};

/// Vertical swing of a path segment above and below the baseline.
pub const WAVE_AMPLITUDE: f64 = 70.0;

/// Distance of a milestone icon from the baseline.
pub const LANE_SPACING: f64 = 60.0;

/// Position of `anchor_x` inside the viewport at the given pan offset.
pub fn screen_x(anchor_x: f64, offset: f64) -> f64 {
    anchor_x + offset
}

/// CSS transform for the pannable canvas.
pub fn translate_x(offset: f64) -> String {
    format!("translateX({offset:.1}px)")
}

/// SVG path data for one wavy segment between two anchors.
///
/// A single cubic curve: the first control point rises above the baseline and
/// the second dips below it, giving an S-shaped bend.
pub fn wave_path(from_x: f64, to_x: f64, baseline: f64, amplitude: f64) -> String {
    let span = to_x - from_x;
    let c1x = from_x + span / 3.0;
    let c2x = from_x + span * 2.0 / 3.0;
    format!(
        "M {from_x:.1} {baseline:.1} C {c1x:.1} {:.1}, {c2x:.1} {:.1}, {to_x:.1} {baseline:.1}",
        baseline - amplitude,
        baseline + amplitude,
    )
}

/// From the track's hub to its last milestone.
pub fn track_path(layout: &Layout, track: Track) -> String {
    let tl = layout.track(track);
    wave_path(tl.hub_x, tl.end_x(), layout.baseline_y, WAVE_AMPLITUDE)
}

/// From the last education milestone to the career hub.
pub fn connector_path(layout: &Layout) -> String {
    wave_path(
        layout.education.end_x(),
        layout.career.hub_x,
        layout.baseline_y,
        WAVE_AMPLITUDE / 2.0,
    )
}

/// Milestones alternate above and below the path.
pub fn lane_y(index: usize, baseline: f64) -> f64 {
    if index % 2 == 0 {
        baseline - LANE_SPACING
    } else {
        baseline + LANE_SPACING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LAYOUT;

    #[test]
    fn test_screen_x() {
        assert_eq!(screen_x(1600.0, -1200.0), 400.0);
    }

    #[test]
    fn test_wave_path_endpoints() {
        let d = wave_path(0.0, 300.0, 100.0, 30.0);
        assert_eq!(d, "M 0.0 100.0 C 100.0 70.0, 200.0 130.0, 300.0 100.0");
    }

    #[test]
    fn test_segments_meet() {
        let edu = track_path(&LAYOUT, Track::Education);
        let link = connector_path(&LAYOUT);
        let career = track_path(&LAYOUT, Track::Career);
        assert!(edu.starts_with("M 100.0 160.0"));
        assert!(edu.ends_with("900.0 160.0"));
        assert!(link.starts_with("M 900.0 160.0"));
        assert!(link.ends_with("1600.0 160.0"));
        assert!(career.starts_with("M 1600.0 160.0"));
        assert!(career.ends_with("3100.0 160.0"));
    }

    #[test]
    fn test_lanes_alternate() {
        assert_eq!(lane_y(0, 160.0), 100.0);
        assert_eq!(lane_y(1, 160.0), 220.0);
        assert_eq!(lane_y(2, 160.0), 100.0);
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate_x(-450.0), "translateX(-450.0px)");
    }
}
