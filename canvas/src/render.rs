//! Rendering: draws a scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the scene and camera and produces pixels.
//! It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use edges::Segment;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::camera::Camera;
use crate::consts::{FALLBACK_STROKE, GRID_STROKE, GRID_WIDTH_PX, SEGMENT_WIDTH_PX, VIEWPORT_FILL, WORLD_FILL};
use crate::scene::{Background, Scene};

/// Draw the full scene: background, then segments in sequence order.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel
/// ratio. `image` is only used when the scene's background is an image.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: &Camera,
    image: Option<&HtmlImageElement>,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear in device pixels, then switch to world units.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.set_fill_style_str(VIEWPORT_FILL);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    // Layer 2: background.
    match (scene.background(), image) {
        (Background::Image { width, height }, Some(img)) => {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, width, height)?;
        }
        _ => draw_grid(ctx, scene, camera),
    }

    // Layer 3: segments, later ones on top.
    let width = camera.screen_dist_to_world(SEGMENT_WIDTH_PX);
    for segment in scene.segments() {
        draw_segment(ctx, segment, width);
    }

    Ok(())
}

fn draw_grid(ctx: &CanvasRenderingContext2d, scene: &Scene, camera: &Camera) {
    let (w, h) = scene.world_size();

    ctx.set_fill_style_str(WORLD_FILL);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.save();
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(camera.screen_dist_to_world(GRID_WIDTH_PX));
    ctx.begin_path();
    for x in Scene::grid_offsets(w) {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
    }
    for y in Scene::grid_offsets(h) {
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
    }
    ctx.stroke();
    ctx.restore();
}

fn draw_segment(ctx: &CanvasRenderingContext2d, segment: &Segment, width: f64) {
    ctx.save();
    // An unparseable color is ignored by the context; reset first so it
    // does not inherit the previous segment's stroke.
    ctx.set_stroke_style_str(FALLBACK_STROKE);
    ctx.set_stroke_style_str(&segment.color);
    ctx.set_line_width(width);
    ctx.set_line_cap("round");

    ctx.begin_path();
    ctx.move_to(segment.x1, segment.y1);
    ctx.line_to(segment.x2, segment.y2);
    ctx.stroke();
    ctx.restore();
}
