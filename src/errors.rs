use thiserror::Error;

use crate::coordinate::CoordinateSpace;

/// A specialized `Result` type for marker-vision operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// The error type for coordinate transforms, region lookups and matching.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VisionError {
    #[error("Coordinate space {space:?} is not a valid endpoint for this operation")]
    InvalidSpace { space: CoordinateSpace },

    #[error("Window geometry unavailable: {missing}")]
    GeometryUnavailable { missing: &'static str },

    #[error("No region registered under name '{name}'")]
    RegionNotFound { name: String },

    #[error("No template loaded under name '{name}'")]
    TemplateNotFound { name: String },

    #[error("Frame capture failed: {reason}")]
    FrameUnavailable { reason: String },
}
