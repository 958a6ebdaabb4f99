//! Shared numeric and style constants for the canvas crate.

// ── Geometry ────────────────────────────────────────────────────

/// Spacing of the fallback grid, in campus-grid units.
pub const GRID_STEP: f64 = 500.0;

/// Most grid lines drawn along one axis; wider worlds stop early.
pub const MAX_GRID_LINES: usize = 1024;

/// Blank margin kept around the fitted world, in CSS pixels.
pub const FIT_MARGIN_PX: f64 = 8.0;

// ── Stroke ──────────────────────────────────────────────────────

/// Segment stroke width in screen pixels, independent of zoom.
pub const SEGMENT_WIDTH_PX: f64 = 3.0;

/// Grid stroke width in screen pixels.
pub const GRID_WIDTH_PX: f64 = 1.0;

// ── Colors ──────────────────────────────────────────────────────

/// Viewport fill behind the world rectangle.
pub const VIEWPORT_FILL: &str = "#e8e4dc";

/// World rectangle fill when no campus image is loaded.
pub const WORLD_FILL: &str = "#fbf9f4";

/// Fallback grid line color.
pub const GRID_STROKE: &str = "rgba(31, 26, 23, 0.15)";

/// Stroke applied before each segment's own color, so an unrecognized
/// color token falls back to this instead of the previous segment's color.
pub const FALLBACK_STROKE: &str = "#1f1a17";
