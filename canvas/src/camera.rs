#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::FIT_MARGIN_PX;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps campus-grid (world) coordinates onto the canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is CSS pixels per campus-grid unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Fit a `world_w` × `world_h` rectangle (origin at 0,0) inside the
    /// viewport, preserving aspect ratio and centering the slack axis.
    ///
    /// Degenerate sizes fall back to the identity camera.
    #[must_use]
    pub fn fit(world_w: f64, world_h: f64, viewport_w: f64, viewport_h: f64) -> Self {
        let avail_w = viewport_w - 2.0 * FIT_MARGIN_PX;
        let avail_h = viewport_h - 2.0 * FIT_MARGIN_PX;
        if world_w <= 0.0 || world_h <= 0.0 || avail_w <= 0.0 || avail_h <= 0.0 {
            return Self::default();
        }

        let zoom = (avail_w / world_w).min(avail_h / world_h);
        Self {
            pan_x: (viewport_w - world_w * zoom) * 0.5,
            pan_y: (viewport_h - world_h * zoom) * 0.5,
            zoom,
        }
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}
