//! Clustering of raw matches into display-ready groups

use std::collections::HashMap;

use super::template::Match;
use crate::types::{Point, Rect};

pub const DEFAULT_MAX_TOTAL: usize = 100;
pub const DEFAULT_GROUP_DISTANCE: u32 = 50;

/// Spatially close same-template matches merged into one display entity.
#[derive(Debug, Clone)]
pub struct MatchGroup {
    pub template_name: String,
    /// Arithmetic mean of member confidences.
    pub confidence: f32,
    /// Smallest axis-aligned box covering all member rects.
    pub rect: Rect,
    pub count: usize,
    pub members: Vec<Match>,
}

fn center_distance(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Cluster a batch of matches into groups.
///
/// The batch is truncated to the `max_total` highest-confidence matches,
/// partitioned by template name, then clustered greedily: the first
/// ungrouped match seeds a cluster and every later ungrouped match whose
/// rect center lies within `group_distance` of the *seed's* center joins
/// it. The seed never converges towards a centroid, so chains of
/// near-adjacent matches split at every second link rather than merging
/// transitively. Returned order is unspecified; sort explicitly for
/// deterministic display.
pub fn group_matches(matches: &[Match], max_total: usize, group_distance: u32) -> Vec<MatchGroup> {
    if matches.is_empty() {
        return Vec::new();
    }

    let mut pool: Vec<Match> = matches.to_vec();
    pool.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pool.truncate(max_total);

    let mut by_template: HashMap<String, Vec<Match>> = HashMap::new();
    for m in pool {
        by_template.entry(m.template_name.clone()).or_default().push(m);
    }

    let mut groups = Vec::new();
    for (template_name, batch) in by_template {
        let mut taken = vec![false; batch.len()];
        for i in 0..batch.len() {
            if taken[i] {
                continue;
            }
            taken[i] = true;
            let seed_center = batch[i].rect.center();
            let mut members = vec![batch[i].clone()];

            for j in (i + 1)..batch.len() {
                if taken[j] {
                    continue;
                }
                if center_distance(seed_center, batch[j].rect.center()) <= group_distance as f32 {
                    taken[j] = true;
                    members.push(batch[j].clone());
                }
            }

            let confidence =
                members.iter().map(|m| m.confidence).sum::<f32>() / members.len() as f32;
            let rect = members
                .iter()
                .skip(1)
                .fold(members[0].rect, |acc, m| acc.union(&m.rect));
            groups.push(MatchGroup {
                template_name: template_name.clone(),
                confidence,
                rect,
                count: members.len(),
                members,
            });
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk(name: &str, confidence: f32, x: i32, y: i32) -> Match {
        Match::new(name, confidence, Rect::new(x, y, 10, 10))
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_matches(&[], DEFAULT_MAX_TOTAL, DEFAULT_GROUP_DISTANCE).is_empty());
    }

    #[test]
    fn single_match_forms_singleton_group() {
        let groups = group_matches(&[mk("a", 0.9, 0, 0)], DEFAULT_MAX_TOTAL, 50);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 1);
        assert_eq!(groups[0].confidence, 0.9);
        assert_eq!(groups[0].rect, Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn nearby_same_template_matches_merge() {
        let matches = vec![mk("a", 0.9, 0, 0), mk("a", 0.7, 30, 0)];
        let groups = group_matches(&matches, DEFAULT_MAX_TOTAL, 50);

        assert_eq!(groups.len(), 1);
        let g = &groups[0];
        assert_eq!(g.count, 2);
        assert!((g.confidence - 0.8).abs() < 1e-6);
        assert_eq!(g.rect, Rect::new(0, 0, 40, 10));
        for m in &g.members {
            assert!(g.rect.contains_rect(&m.rect));
        }
    }

    #[test]
    fn different_templates_never_share_a_group() {
        let matches = vec![mk("a", 0.9, 0, 0), mk("b", 0.9, 5, 5)];
        let groups = group_matches(&matches, DEFAULT_MAX_TOTAL, 50);

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.count == 1));
    }

    #[test]
    fn chain_clusters_by_seed_not_transitively() {
        // Five matches along a 200 px chain, adjacent pairs exactly 50 px
        // apart. Seed-based clustering takes {0,50}, {100,150}, {200}.
        let matches: Vec<Match> = (0..5).map(|i| mk("a", 0.9, i * 50, 0)).collect();
        let groups = group_matches(&matches, DEFAULT_MAX_TOTAL, 50);

        let mut counts: Vec<usize> = groups.iter().map(|g| g.count).collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![1, 2, 2]);
    }

    #[test]
    fn group_count_never_exceeds_same_template_input() {
        let matches = vec![
            mk("a", 0.9, 0, 0),
            mk("a", 0.8, 5, 0),
            mk("b", 0.7, 0, 0),
        ];
        let groups = group_matches(&matches, DEFAULT_MAX_TOTAL, 50);

        for g in &groups {
            let same_template = matches
                .iter()
                .filter(|m| m.template_name == g.template_name)
                .count();
            assert!(g.count <= same_template);
            assert_eq!(g.count, g.members.len());
        }
    }

    #[test]
    fn truncates_to_highest_confidence_prefix() {
        // Spread out so nothing merges; only the top 2 by confidence survive
        let matches = vec![
            mk("a", 0.5, 0, 0),
            mk("a", 0.9, 200, 0),
            mk("a", 0.7, 400, 0),
            mk("a", 0.3, 600, 0),
        ];
        let groups = group_matches(&matches, 2, 50);

        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, 2);
        let mut confs: Vec<f32> = groups.iter().map(|g| g.confidence).collect();
        confs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(confs, vec![0.7, 0.9]);
    }
}
