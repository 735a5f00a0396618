//! Non-maximum suppression of redundant detections

use super::template::Match;
use crate::types::Rect;

pub const DEFAULT_OVERLAP_THRESHOLD: f32 = 0.5;

/// Overlap between two boxes as `max(intersection/area_a,
/// intersection/area_b)` rather than strict IoU, so a small box fully
/// inside a large one still counts as a full overlap.
pub fn overlap_ratio(a: &Rect, b: &Rect) -> f32 {
    let Some(inter) = a.intersection(b) else {
        return 0.0;
    };
    let inter_area = inter.area() as f32;
    let ratio_a = if a.area() > 0 {
        inter_area / a.area() as f32
    } else {
        0.0
    };
    let ratio_b = if b.area() > 0 {
        inter_area / b.area() as f32
    } else {
        0.0
    };
    ratio_a.max(ratio_b)
}

/// Greedy confidence-ordered suppression over the whole batch.
///
/// Suppression is purely geometric: near-coincident matches from different
/// templates also collapse to the single highest-confidence survivor.
/// Confidence ties keep their input order (stable sort).
pub fn non_max_suppression(matches: Vec<Match>, overlap_threshold: f32) -> Vec<Match> {
    if matches.is_empty() {
        return matches;
    }

    let mut sorted = matches;
    sorted.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<Match> = Vec::new();
    for candidate in sorted {
        let suppressed = kept
            .iter()
            .any(|k| overlap_ratio(&candidate.rect, &k.rect) > overlap_threshold);
        if !suppressed {
            kept.push(candidate);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk(name: &str, confidence: f32, x: i32, y: i32, w: u32, h: u32) -> Match {
        Match::new(name, confidence, Rect::new(x, y, w, h))
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(non_max_suppression(Vec::new(), DEFAULT_OVERLAP_THRESHOLD).is_empty());
    }

    #[test]
    fn disjoint_matches_all_survive() {
        let matches = vec![
            mk("a", 0.7, 0, 0, 10, 10),
            mk("a", 0.9, 100, 0, 10, 10),
            mk("a", 0.8, 0, 100, 10, 10),
        ];
        let kept = non_max_suppression(matches, DEFAULT_OVERLAP_THRESHOLD);

        assert_eq!(kept.len(), 3);
        // Content unchanged, order by confidence descending
        assert_eq!(kept[0].confidence, 0.9);
        assert_eq!(kept[1].confidence, 0.8);
        assert_eq!(kept[2].confidence, 0.7);
    }

    #[test]
    fn heavy_overlap_keeps_only_higher_confidence() {
        let matches = vec![
            mk("a", 0.85, 2, 2, 40, 40),
            mk("a", 0.99, 0, 0, 40, 40),
        ];
        let kept = non_max_suppression(matches, DEFAULT_OVERLAP_THRESHOLD);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].confidence, 0.99);
        assert_eq!(kept[0].rect, Rect::new(0, 0, 40, 40));
    }

    #[test]
    fn exact_threshold_overlap_is_not_suppressed() {
        // Intersection is exactly half of each box: ratio == 0.5, which is
        // not strictly above the threshold
        let matches = vec![mk("a", 0.9, 0, 0, 10, 10), mk("a", 0.8, 0, 5, 10, 10)];
        let kept = non_max_suppression(matches, 0.5);

        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn suppresses_across_template_identities() {
        // Different templates at the same spot still collapse to one
        let matches = vec![
            mk("cross", 0.8, 0, 0, 20, 20),
            mk("circle", 0.95, 1, 1, 20, 20),
        ];
        let kept = non_max_suppression(matches, DEFAULT_OVERLAP_THRESHOLD);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].template_name, "circle");
    }

    #[test]
    fn contained_small_box_counts_as_full_overlap() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(40, 40, 10, 10);

        assert_eq!(overlap_ratio(&a, &b), 1.0);
    }
}
