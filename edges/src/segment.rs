//! Segment model and the campus-grid coordinate bound.

#[cfg(test)]
#[path = "segment_test.rs"]
mod segment_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{MAX_COORD, MIN_COORD};

/// One colored line to draw, in campus-grid units.
///
/// Segments produced by [`crate::validate`] always have coordinates inside
/// the configured [`CoordBounds`]. Segments built from routing-service
/// output are taken as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Stroke color, forwarded verbatim to the renderer.
    pub color: String,
}

impl Segment {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: impl Into<String>) -> Self {
        Self { x1, y1, x2, y2, color: color.into() }
    }

    /// The four coordinates in field order.
    #[must_use]
    pub fn coords(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

/// Renders the edge-line form accepted by the validator.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} {}", self.x1, self.y1, self.x2, self.y2, self.color)
    }
}

/// Closed coordinate interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for CoordBounds {
    fn default() -> Self {
        Self { min: MIN_COORD, max: MAX_COORD }
    }
}

impl CoordBounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the bound. NaN is never inside.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the interval.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
