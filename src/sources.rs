//! Collaborator contracts for frame capture and window tracking
//!
//! Actual capture and window discovery live outside this crate; the core only
//! depends on these traits. `StaticFrame` and `StaticGeometry` carry fixed
//! values for tests and simple embedders.

use image::GrayImage;

use crate::types::Rect;

/// Supplies the raster frame the matcher scans, plus the DPI factor the
/// frame was captured under.
pub trait FrameSource {
    /// A grayscale snapshot of the tracked window, or `None` when capture
    /// transiently fails.
    fn capture(&self) -> Option<GrayImage>;

    /// Ratio between screen device pixels and the captured frame's pixels.
    fn dpi_scale(&self) -> f32 {
        1.0
    }
}

/// Supplies the tracked window's current geometry.
pub trait WindowGeometry {
    /// Outer window rectangle in screen coordinates, or `None` while the
    /// window is lost.
    fn window_rect(&self) -> Option<Rect>;

    /// Client-area rectangle in screen coordinates, or `None` while the
    /// window is lost.
    fn client_rect(&self) -> Option<Rect>;

    /// Current DPI scale of the monitor hosting the window.
    fn dpi_scale(&self) -> f32 {
        1.0
    }
}

/// A frame source returning a fixed image.
#[derive(Debug, Clone)]
pub struct StaticFrame {
    pub frame: Option<GrayImage>,
    pub dpi_scale: f32,
}

impl StaticFrame {
    pub fn new(frame: GrayImage) -> Self {
        Self {
            frame: Some(frame),
            dpi_scale: 1.0,
        }
    }

    /// A source whose capture always fails.
    pub fn unavailable() -> Self {
        Self {
            frame: None,
            dpi_scale: 1.0,
        }
    }
}

impl FrameSource for StaticFrame {
    fn capture(&self) -> Option<GrayImage> {
        self.frame.clone()
    }

    fn dpi_scale(&self) -> f32 {
        self.dpi_scale
    }
}

/// Window geometry with fixed rectangles.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    pub window: Option<Rect>,
    pub client: Option<Rect>,
    pub dpi_scale: f32,
}

impl StaticGeometry {
    pub fn new(window: Rect, client: Rect) -> Self {
        Self {
            window: Some(window),
            client: Some(client),
            dpi_scale: 1.0,
        }
    }

    pub fn with_dpi_scale(mut self, scale: f32) -> Self {
        self.dpi_scale = scale;
        self
    }

    /// Geometry for a window that is currently lost.
    pub fn lost() -> Self {
        Self {
            window: None,
            client: None,
            dpi_scale: 1.0,
        }
    }
}

impl WindowGeometry for StaticGeometry {
    fn window_rect(&self) -> Option<Rect> {
        self.window
    }

    fn client_rect(&self) -> Option<Rect> {
        self.client
    }

    fn dpi_scale(&self) -> f32 {
        self.dpi_scale
    }
}
