use std::f64::consts::{PI, TAU};

use serde::Serialize;

use crate::constants::PLACEHOLDER_CHOICE;
use crate::palette::Palette;

/// Maps any angle into `[0, 2π)`, same as `((a % 2π) + 2π) % 2π` but exact
/// (and idempotent) for angles already in range.
pub fn normalize_angle(angle: f64) -> f64 {
    let t = angle % TAU;
    let t = if t < 0.0 { t + TAU } else { t };
    if t >= TAU {
        0.0
    } else {
        t
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
pub fn short_angle_dist(from: f64, to: f64) -> f64 {
    let mut d = normalize_angle(to) - normalize_angle(from);
    if d > PI {
        d -= TAU;
    }
    if d <= -PI {
        d += TAU;
    }
    d
}

/// One angular slice of the wheel. Only built by [`SegmentSet::build`], so it
/// is serialize-only.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub color: Option<String>,
    /// Inclusive start, in `[0, 2π)`.
    pub start: f64,
    pub arc: f64,
    /// Exclusive end, always the start of the next segment. Equal to `start`
    /// for a lone segment covering the whole circle.
    pub end: f64,
}

impl Segment {
    /// Half-open, wrap-aware containment of an already normalized angle.
    pub fn contains(&self, a: f64) -> bool {
        if self.start < self.end {
            self.start <= a && a < self.end
        } else {
            a >= self.start || a < self.end
        }
    }

    pub fn midpoint(&self) -> f64 {
        self.start + self.arc / 2.0
    }
}

/// Immutable partition of the circle into equal segments, in choice order.
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet {
    segments: Vec<Segment>,
}

impl SegmentSet {
    pub fn build<S: AsRef<str>>(
        choices: &[S],
        pointer_angle: f64,
        palette: Option<&Palette>,
    ) -> Self {
        let names: Vec<&str> = if choices.is_empty() {
            vec![PLACEHOLDER_CHOICE]
        } else {
            choices.iter().map(|c| c.as_ref()).collect()
        };

        let count = names.len();
        let arc = TAU / count as f64;
        let starts: Vec<f64> = (0..count)
            .map(|i| normalize_angle(pointer_angle + i as f64 * arc))
            .collect();

        let segments = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Segment {
                name: name.to_string(),
                color: palette.map(|p| p.color_for(i).to_string()),
                start: starts[i],
                arc,
                end: starts[(i + 1) % count],
            })
            .collect();

        Self { segments }
    }

    /// Segment under the pointer for an accumulated rotation angle.
    ///
    /// Boundaries belong to the segment that starts there. First match in
    /// list order wins; if rounding leaves no match, segment 0 does.
    pub fn winner_at(&self, rotation_angle: f64) -> &Segment {
        let a = normalize_angle(rotation_angle);
        self.segments
            .iter()
            .find(|s| s.contains(a))
            .unwrap_or(&self.segments[0])
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: an empty choice list still yields the placeholder segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

pub fn build_segments<S: AsRef<str>>(
    choices: &[S],
    pointer_angle: f64,
    palette: Option<&Palette>,
) -> SegmentSet {
    SegmentSet::build(choices, pointer_angle, palette)
}

pub fn winner_at(segments: &SegmentSet, rotation_angle: f64) -> &Segment {
    segments.winner_at(rotation_angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn yes_no_maybe() -> SegmentSet {
        build_segments(&["Yes", "No", "Maybe"], 0.0, None)
    }

    #[test]
    fn test_three_choices_layout() {
        let segments = yes_no_maybe();
        let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Yes", "No", "Maybe"]);

        let s = segments.as_slice();
        assert!((s[0].start - 0.0).abs() < EPS);
        assert!((s[1].start - TAU / 3.0).abs() < EPS);
        assert!((s[2].start - 2.0 * TAU / 3.0).abs() < EPS);
        assert_eq!(s[2].end, s[0].start);
    }

    #[test]
    fn test_three_choices_winners() {
        let segments = yes_no_maybe();
        assert_eq!(winner_at(&segments, 0.0).name, "Yes");
        assert_eq!(winner_at(&segments, 2.0 * PI / 3.0).name, "No");
        assert_eq!(winner_at(&segments, 2.0 * PI - 0.001).name, "Maybe");
        assert_eq!(winner_at(&segments, 4.0 * PI / 3.0 - 0.001).name, "No");
    }

    #[test]
    fn test_negative_and_large_angles_normalize() {
        let segments = yes_no_maybe();
        assert_eq!(winner_at(&segments, -0.001).name, "Maybe");
        assert_eq!(winner_at(&segments, -TAU + 0.5).name, "Yes");
        assert_eq!(winner_at(&segments, 1000.0 * TAU + 2.5).name, "No");
    }

    #[test]
    fn test_empty_choices_yield_placeholder() {
        let empty: [&str; 0] = [];
        let segments = build_segments(&empty, 0.0, None);
        assert_eq!(segments.len(), 1);
        assert!(!segments.is_empty());

        let only = &segments.as_slice()[0];
        assert_eq!(only.name, PLACEHOLDER_CHOICE);
        assert!((only.arc - TAU).abs() < EPS);

        for angle in [-7.0, -0.1, 0.0, 1.0, 3.2, 6.28, 100.0] {
            assert_eq!(winner_at(&segments, angle), only);
        }
    }

    #[test]
    fn test_partition_for_many_sizes() {
        for n in 1..=24 {
            let choices: Vec<String> = (0..n).map(|i| format!("choice {}", i)).collect();
            for pointer in [0.0, -PI / 2.0, 1.234] {
                let segments = build_segments(&choices, pointer, None);
                assert_eq!(segments.len(), n);

                let total: f64 = segments.iter().map(|s| s.arc).sum();
                assert!((total - TAU).abs() < 1e-9);
                assert!((segments.as_slice()[0].start - normalize_angle(pointer)).abs() < EPS);

                // Every sampled angle, boundaries included, lands in exactly one segment
                let boundaries = segments.iter().map(|s| s.start);
                let samples = (0..997).map(|k| k as f64 * TAU / 997.0);
                for a in samples.chain(boundaries) {
                    let hits = segments.iter().filter(|s| s.contains(a)).count();
                    assert_eq!(hits, 1, "n={} pointer={} a={}", n, pointer, a);
                }
            }
        }
    }

    #[test]
    fn test_boundary_belongs_to_next_segment() {
        let segments = build_segments(&["A", "B", "C", "D"], -PI / 2.0, None);
        for s in segments.iter() {
            assert_eq!(winner_at(&segments, s.start).name, s.name);
        }
    }

    #[test]
    fn test_winner_is_periodic() {
        let segments = build_segments(&["A", "B", "C", "D", "E"], -PI / 2.0, None);
        for a in [0.3, 1.7, 2.5, 4.0, 5.9, -1.2] {
            let base = &winner_at(&segments, a).name;
            for k in -3..=3 {
                assert_eq!(&winner_at(&segments, a + TAU * k as f64).name, base);
            }
        }
    }

    #[test]
    fn test_segment_serializes_for_display() {
        let segments = yes_no_maybe();
        let json = serde_json::to_value(&segments.as_slice()[1]).unwrap();
        assert_eq!(json["name"], "No");
        assert!(json["color"].is_null());
    }

    #[test]
    fn test_colors_follow_palette() {
        let palette = Palette::default();
        let segments = build_segments(&["a", "b", "c"], 0.0, Some(&palette));
        let colors: Vec<&str> = segments.iter().filter_map(|s| s.color.as_deref()).collect();
        assert_eq!(colors, vec!["#EA4B62", "#F7E04B", "#EA4B62"]);
    }

    #[test]
    fn test_short_angle_dist_range() {
        assert!((short_angle_dist(0.0, 1.0) - 1.0).abs() < EPS);
        assert!((short_angle_dist(1.0, 0.0) + 1.0).abs() < EPS);
        assert!((short_angle_dist(0.1, TAU - 0.1) + 0.2).abs() < EPS);
        assert!((short_angle_dist(TAU - 0.1, 0.1) - 0.2).abs() < EPS);
        assert!((short_angle_dist(0.0, PI) - PI).abs() < EPS);
        assert!((short_angle_dist(PI, 0.0) - PI).abs() < EPS);
        for k in 0..50 {
            let from = k as f64 * 0.37 - 9.0;
            let d = short_angle_dist(from, 2.0);
            assert!(d > -PI && d <= PI);
        }
    }

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < EPS);
        assert!(normalize_angle(-1e-18) < TAU);
        assert!(normalize_angle(-1e-18) >= 0.0);

        let once = normalize_angle(-2.0);
        assert_eq!(normalize_angle(once), once);
    }
}
