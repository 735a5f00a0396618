//! Configuration for matching, suppression and grouping

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Confidence threshold for template matching (0.0 to 1.0)
    pub confidence_threshold: f32,
    /// Overlap ratio above which a lower-confidence match is suppressed
    pub overlap_threshold: f32,
    /// Cap on matches fed into grouping, highest confidence first
    pub max_total_matches: usize,
    /// Maximum rect-center distance to a cluster seed, in pixels
    pub group_distance: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.8,
            overlap_threshold: 0.5,
            max_total_matches: 100,
            group_distance: 50,
        }
    }
}

/// Preset for clicking single UI targets: strict confidence, tight grouping.
pub fn create_input_config() -> MatchConfig {
    MatchConfig {
        confidence_threshold: 0.9,
        overlap_threshold: 0.5,
        max_total_matches: 10,
        group_distance: 20,
    }
}

/// Preset for overlay display of repeated markers: looser confidence,
/// wider grouping radius.
pub fn create_overlay_config() -> MatchConfig {
    MatchConfig {
        confidence_threshold: 0.75,
        overlap_threshold: 0.5,
        max_total_matches: 100,
        group_distance: 50,
    }
}
