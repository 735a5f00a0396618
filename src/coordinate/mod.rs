//! Coordinate-space transform engine
//!
//! Converts points between the screen, window, client and logical frames of
//! a tracked window and stores named regions that can be re-derived in any
//! space as the window moves or the DPI scale changes.

pub mod mapper;
pub mod space;


pub use mapper::{CoordinateMapper, Region, WindowEvent};
pub use space::CoordinateSpace;
