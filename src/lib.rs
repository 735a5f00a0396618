//! marker-vision: the matching and geometry core of a screen-automation
//! toolkit.
//!
//! The crate finds known visual markers inside captured frames of a tracked
//! window and keeps their positions consistent across coordinate spaces:
//!
//! - [`match_image`] — normalized template matching, non-maximum
//!   suppression and spatial grouping of detections.
//! - [`coordinate`] — point transforms between screen, window, client and
//!   logical spaces, plus a named-region registry.
//!
//! Frame capture, window discovery, OCR, GUI shells and persistence are
//! external collaborators reached through the traits in [`sources`].

pub mod coordinate;
pub mod errors;
pub mod events;
pub mod match_image;
pub mod sources;
pub mod types;

pub use coordinate::{CoordinateMapper, CoordinateSpace, Region, WindowEvent};
pub use errors::{VisionError, VisionResult};
pub use events::DetectionEvent;
pub use match_image::{
    DetectionReport, MarkerDetector, Match, MatchConfig, MatchGroup, Template, TemplateStore,
    group_matches, non_max_suppression,
};
pub use sources::{FrameSource, StaticFrame, StaticGeometry, WindowGeometry};
pub use types::{Point, Rect};
