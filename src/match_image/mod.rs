//! Marker matching pipeline
//!
//! One pass runs frame → template matching → non-maximum suppression →
//! grouping. Raw matches and groups are ephemeral value objects recomputed
//! every pass; only the template store persists between passes.

pub mod config;
pub mod detector;
pub mod grouping;
pub mod nms;
pub mod template;


// Re-export main types and functions
pub use config::{MatchConfig, create_input_config, create_overlay_config};
pub use detector::{DetectionReport, MarkerDetector};
pub use grouping::{DEFAULT_GROUP_DISTANCE, DEFAULT_MAX_TOTAL, MatchGroup, group_matches};
pub use nms::{DEFAULT_OVERLAP_THRESHOLD, non_max_suppression, overlap_ratio};
pub use template::{Match, Template, TemplateStore};
