//! Coordinate space identifiers

use serde::{Deserialize, Serialize};

/// The reference frames a point or rectangle may be expressed in.
///
/// `Physical` identifies the raw unscaled device-pixel frame a capture is
/// taken in. It is carried for labelling only and is not a valid endpoint
/// of `transform_point`, nor a valid space to pin a region to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateSpace {
    /// Global desktop frame.
    Screen,
    /// Relative to the tracked window's top-left corner.
    Window,
    /// Relative to the client-area top-left (window minus borders/titlebar).
    Client,
    /// Screen divided by the DPI scale.
    Logical,
    /// Raw unscaled device pixels.
    Physical,
}

impl CoordinateSpace {
    /// Whether this space may appear as an endpoint of `transform_point`
    /// or as a region's pinned space.
    pub fn is_transformable(&self) -> bool {
        !matches!(self, CoordinateSpace::Physical)
    }

    /// All spaces `transform_point` accepts.
    pub const TRANSFORMABLE: [CoordinateSpace; 4] = [
        CoordinateSpace::Screen,
        CoordinateSpace::Window,
        CoordinateSpace::Client,
        CoordinateSpace::Logical,
    ];
}
