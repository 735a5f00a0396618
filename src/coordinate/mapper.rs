//! Point transforms between coordinate spaces and the named-region registry

use std::collections::HashMap;

use log::{debug, warn};

use super::space::CoordinateSpace;
use crate::errors::{VisionError, VisionResult};
use crate::sources::WindowGeometry;
use crate::types::{Point, Rect};

/// A named rectangle pinned to one coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub rect: Rect,
    pub space: CoordinateSpace,
}

/// Window-tracking notifications the mapper passively observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Found,
    Moved,
    Lost,
}

/// Converts points between SCREEN, WINDOW, CLIENT and LOGICAL spaces and
/// owns the named-region registry.
///
/// Transforms always re-derive from the live geometry source; nothing
/// derived from a window position is cached. The registry is the only
/// mutable state, so sharing a mapper across threads requires an external
/// mutex around each call.
pub struct CoordinateMapper<G: WindowGeometry> {
    geometry: G,
    regions: HashMap<String, Region>,
    window_tracked: bool,
}

impl<G: WindowGeometry> CoordinateMapper<G> {
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            regions: HashMap::new(),
            window_tracked: false,
        }
    }

    /// Convert `point` from `from` space to `to` space using the current
    /// window geometry.
    ///
    /// WINDOW↔CLIENT is a direct offset shift; every other distinct pair
    /// pivots through SCREEN. Fails with `InvalidSpace` for a `Physical`
    /// endpoint and `GeometryUnavailable` when either rectangle is absent.
    pub fn transform_point(
        &self,
        point: Point,
        from: CoordinateSpace,
        to: CoordinateSpace,
    ) -> VisionResult<Point> {
        if !from.is_transformable() {
            return Err(VisionError::InvalidSpace { space: from });
        }
        if !to.is_transformable() {
            return Err(VisionError::InvalidSpace { space: to });
        }

        let window = self
            .geometry
            .window_rect()
            .ok_or(VisionError::GeometryUnavailable {
                missing: "window rect",
            })?;
        let client = self
            .geometry
            .client_rect()
            .ok_or(VisionError::GeometryUnavailable {
                missing: "client rect",
            })?;

        if from == to {
            return Ok(point);
        }

        // Direct shift avoids accumulating rounding error through SCREEN.
        let client_dx = client.x - window.x;
        let client_dy = client.y - window.y;
        match (from, to) {
            (CoordinateSpace::Window, CoordinateSpace::Client) => {
                return Ok(point.offset(-client_dx, -client_dy));
            }
            (CoordinateSpace::Client, CoordinateSpace::Window) => {
                return Ok(point.offset(client_dx, client_dy));
            }
            _ => {}
        }

        let screen = self.to_screen(point, from, &window, &client);
        Ok(self.from_screen(screen, to, &window, &client))
    }

    fn to_screen(&self, point: Point, from: CoordinateSpace, window: &Rect, client: &Rect) -> Point {
        match from {
            CoordinateSpace::Screen => point,
            CoordinateSpace::Window => point.offset(window.x, window.y),
            CoordinateSpace::Client => point.offset(client.x, client.y),
            CoordinateSpace::Logical => {
                let scale = self.effective_dpi_scale();
                Point::new(
                    (point.x as f64 * scale).round() as i32,
                    (point.y as f64 * scale).round() as i32,
                )
            }
            // Rejected before any pivot happens
            CoordinateSpace::Physical => point,
        }
    }

    fn from_screen(&self, point: Point, to: CoordinateSpace, window: &Rect, client: &Rect) -> Point {
        match to {
            CoordinateSpace::Screen => point,
            CoordinateSpace::Window => point.offset(-window.x, -window.y),
            CoordinateSpace::Client => point.offset(-client.x, -client.y),
            CoordinateSpace::Logical => {
                let scale = self.effective_dpi_scale();
                Point::new(
                    (point.x as f64 / scale).round() as i32,
                    (point.y as f64 / scale).round() as i32,
                )
            }
            CoordinateSpace::Physical => point,
        }
    }

    fn effective_dpi_scale(&self) -> f64 {
        let scale = self.geometry.dpi_scale() as f64;
        if scale > 0.0 { scale } else { 1.0 }
    }

    /// Store a named region pinned to `space`, overwriting any existing
    /// entry of the same name. Misuse (blank name, `Physical` space) is
    /// logged and swallowed so a long-running loop never crashes on it.
    pub fn add_region(&mut self, name: &str, rect: Rect, space: CoordinateSpace) {
        if name.trim().is_empty() {
            warn!("add_region ignored: blank region name");
            return;
        }
        if !space.is_transformable() {
            warn!("add_region ignored: region '{name}' pinned to invalid space {space:?}");
            return;
        }
        self.regions.insert(name.to_string(), Region { rect, space });
    }

    /// Remove a region if present.
    pub fn remove_region(&mut self, name: &str) {
        self.regions.remove(name);
    }

    /// Resolve a stored region's rectangle in `space`.
    ///
    /// When the stored space differs from the requested one, only the
    /// top-left corner is transformed; width and height are re-attached
    /// unscaled. DPI-aware sizing is left to callers that need it.
    pub fn get_region(&self, name: &str, space: CoordinateSpace) -> VisionResult<Rect> {
        let region = self
            .regions
            .get(name)
            .ok_or_else(|| VisionError::RegionNotFound {
                name: name.to_string(),
            })?;

        if region.space == space {
            return Ok(region.rect);
        }

        let origin = self.transform_point(region.rect.origin(), region.space, space)?;
        Ok(Rect::new(
            origin.x,
            origin.y,
            region.rect.width,
            region.rect.height,
        ))
    }

    /// Whether `point` is plausible in `space`: never negative, and inside
    /// the live rectangle for WINDOW/CLIENT. SCREEN and LOGICAL impose no
    /// upper bound. Returns false for WINDOW/CLIENT while geometry is
    /// unavailable.
    pub fn is_valid_coordinate(&self, point: Point, space: CoordinateSpace) -> bool {
        if point.x < 0 || point.y < 0 {
            return false;
        }
        match space {
            CoordinateSpace::Window => self
                .geometry
                .window_rect()
                .is_some_and(|r| (point.x as u32) < r.width && (point.y as u32) < r.height),
            CoordinateSpace::Client => self
                .geometry
                .client_rect()
                .is_some_and(|r| (point.x as u32) < r.width && (point.y as u32) < r.height),
            _ => true,
        }
    }

    /// Bookkeeping only; transforms always read the live geometry source.
    pub fn observe(&mut self, event: WindowEvent) {
        debug!("window event observed: {event:?}");
        self.window_tracked = !matches!(event, WindowEvent::Lost);
    }

    pub fn is_window_tracked(&self) -> bool {
        self.window_tracked
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn region_names(&self) -> Vec<String> {
        self.regions.keys().cloned().collect()
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }
}
