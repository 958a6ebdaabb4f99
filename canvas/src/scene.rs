//! Scene model: what the renderer paints, in draw order.
//!
//! A scene is a background plus the committed segment sequence. Segment order
//! is z-order: the renderer walks the slice front to back, so later segments
//! cover earlier ones. The scene is replaced wholesale on every commit.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use edges::{CoordBounds, Segment, SegmentSink};

use crate::consts::{GRID_STEP, MAX_GRID_LINES};

/// What sits behind the segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Plain world rectangle with a reference grid, sized to the coordinate bound.
    Grid,
    /// A campus map image whose pixels are campus-grid units.
    Image { width: f64, height: f64 },
}

/// Background plus committed segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    background: Background,
    bounds: CoordBounds,
    segments: Vec<Segment>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(CoordBounds::default())
    }
}

impl Scene {
    #[must_use]
    pub fn new(bounds: CoordBounds) -> Self {
        Self { background: Background::Grid, bounds, segments: Vec::new() }
    }

    #[must_use]
    pub fn background(&self) -> Background {
        self.background
    }

    /// Switch to the campus image. Non-positive sizes keep the grid.
    pub fn set_image_background(&mut self, width: f64, height: f64) {
        self.background = if width > 0.0 && height > 0.0 {
            Background::Image { width, height }
        } else {
            Background::Grid
        };
    }

    pub fn set_grid_background(&mut self) {
        self.background = Background::Grid;
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Replace the committed sequence.
    pub fn set_segments(&mut self, segments: &[Segment]) {
        self.segments.clear();
        self.segments.extend_from_slice(segments);
    }

    /// Size of the world rectangle anchored at the origin.
    #[must_use]
    pub fn world_size(&self) -> (f64, f64) {
        match self.background {
            Background::Image { width, height } => (width, height),
            Background::Grid => {
                let side = self.bounds.max.max(0.0);
                (side, side)
            }
        }
    }

    /// Grid line offsets along one axis of length `extent`, including both ends.
    /// At most [`MAX_GRID_LINES`] interior lines; non-finite extents get none.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn grid_offsets(extent: f64) -> Vec<f64> {
        if !extent.is_finite() || extent <= 0.0 {
            return Vec::new();
        }
        let steps = (extent / GRID_STEP).ceil().min(MAX_GRID_LINES as f64) as usize;
        let mut offsets: Vec<f64> = (0..steps).map(|i| i as f64 * GRID_STEP).collect();
        offsets.push(extent);
        offsets
    }
}

impl SegmentSink for Scene {
    fn commit(&mut self, segments: &[Segment]) {
        self.set_segments(segments);
    }
}
