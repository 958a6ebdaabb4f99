#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn core_default_viewport_is_zero() {
    let core = EngineCore::default();
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn core_default_has_no_segments() {
    assert!(EngineCore::default().segments().is_empty());
}

#[test]
fn core_default_camera_is_identity() {
    assert_eq!(EngineCore::default().camera(), Camera::default());
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn set_viewport_fits_grid_world() {
    let mut core = EngineCore::default();
    core.set_viewport(816.0, 416.0, 2.0);
    let cam = core.camera();
    assert!((cam.zoom - 0.1).abs() < 1e-12);
    assert_eq!(core.backing_size(), (1632, 832));
}

#[test]
fn set_viewport_sanitizes_bad_dpr() {
    let mut core = EngineCore::default();
    core.set_viewport(100.0, 100.0, 0.0);
    assert_eq!(core.dpr, 1.0);
    core.set_viewport(-5.0, 100.0, 1.0);
    assert_eq!(core.viewport_width, 0.0);
}

#[test]
fn image_background_refits_camera() {
    let mut core = EngineCore::default();
    core.set_viewport(1000.0, 1000.0, 1.0);
    let grid_zoom = core.camera().zoom;
    core.set_image_background(8000.0, 8000.0);
    assert!(core.camera().zoom < grid_zoom);
    core.set_grid_background();
    assert_eq!(core.camera().zoom, grid_zoom);
}

// =============================================================
// Segments
// =============================================================

#[test]
fn commit_replaces_segments() {
    let mut core = EngineCore::default();
    core.commit(&[Segment::new(0.0, 0.0, 1.0, 1.0, "red")]);
    core.commit(&[Segment::new(2.0, 2.0, 3.0, 3.0, "blue"), Segment::new(4.0, 4.0, 5.0, 5.0, "green")]);
    assert_eq!(core.segments().len(), 2);
    assert_eq!(core.segments()[0].color, "blue");
}

// =============================================================
// world_at
// =============================================================

#[test]
fn world_at_maps_viewport_center_to_world_center() {
    let mut core = EngineCore::default();
    core.set_viewport(600.0, 400.0, 1.0);
    let world = core.world_at(pt(300.0, 200.0)).expect("center is on the world");
    assert!((world.x - 2000.0).abs() < 1e-9);
    assert!((world.y - 2000.0).abs() < 1e-9);
}

#[test]
fn world_at_outside_world_is_none() {
    let mut core = EngineCore::default();
    core.set_viewport(600.0, 400.0, 1.0);
    assert!(core.world_at(pt(1.0, 200.0)).is_none());
}
