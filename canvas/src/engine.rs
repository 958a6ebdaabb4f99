use edges::{CoordBounds, Segment, SegmentSink};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::camera::{Camera, Point};
use crate::render;
use crate::scene::Scene;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(CoordBounds::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(bounds: CoordBounds) -> Self {
        Self {
            scene: Scene::new(bounds),
            camera: Camera::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Data inputs ---

    /// Replace the committed segments.
    pub fn commit(&mut self, segments: &[Segment]) {
        self.scene.set_segments(segments);
    }

    /// Use a campus image of the given natural size as the background.
    pub fn set_image_background(&mut self, width: f64, height: f64) {
        self.scene.set_image_background(width, height);
        self.refit();
    }

    /// Drop the campus image and fall back to the grid.
    pub fn set_grid_background(&mut self) {
        self.scene.set_grid_background();
        self.refit();
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.refit();
    }

    fn refit(&mut self) {
        let (world_w, world_h) = self.scene.world_size();
        self.camera = Camera::fit(world_w, world_h, self.viewport_width, self.viewport_height);
    }

    // --- Queries ---

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.scene.segments()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Campus-grid coordinates under a screen point, if it falls on the world.
    #[must_use]
    pub fn world_at(&self, screen: Point) -> Option<Point> {
        let world = self.camera.screen_to_world(screen);
        let (w, h) = self.scene.world_size();
        let inside = (0.0..=w).contains(&world.x) && (0.0..=h).contains(&world.y);
        inside.then_some(world)
    }

    /// Backing-store size in device pixels for the current viewport.
    #[must_use]
    pub fn backing_size(&self) -> (u32, u32) {
        (to_device_px(self.viewport_width, self.dpr), to_device_px(self.viewport_height, self.dpr))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_device_px(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
#[derive(Debug)]
pub struct Engine {
    canvas: HtmlCanvasElement,
    image: Option<HtmlImageElement>,
    last_error: Option<JsValue>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, bounds: CoordBounds) -> Self {
        Self { canvas, image: None, last_error: None, core: EngineCore::new(bounds) }
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the backing store to match.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let (w, h) = self.core.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    // --- Background ---

    /// Draw segments over a loaded campus image. The image's natural size
    /// defines the world rectangle.
    pub fn set_background_image(&mut self, image: HtmlImageElement) {
        let width = f64::from(image.natural_width());
        let height = f64::from(image.natural_height());
        self.core.set_image_background(width, height);
        self.image = Some(image);
    }

    pub fn clear_background_image(&mut self) {
        self.core.set_grid_background();
        self.image = None;
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Err(JsValue::from_str("2d context unavailable"));
        };
        let ctx = ctx.dyn_into::<CanvasRenderingContext2d>().map_err(JsValue::from)?;
        render::draw(
            &ctx,
            &self.core.scene,
            &self.core.camera,
            self.image.as_ref(),
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    /// Error from the most recent render triggered by a commit, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&JsValue> {
        self.last_error.as_ref()
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.core.segments()
    }

    #[must_use]
    pub fn world_at(&self, screen: Point) -> Option<Point> {
        self.core.world_at(screen)
    }
}

/// Commit replaces the scene and repaints immediately.
impl SegmentSink for Engine {
    fn commit(&mut self, segments: &[Segment]) {
        self.core.commit(segments);
        self.last_error = self.render().err();
    }
}
