#![allow(clippy::float_cmp)]

use edges::DrawController;

use super::*;

fn seg(x: f64, color: &str) -> Segment {
    Segment::new(x, 0.0, x, 100.0, color)
}

#[test]
fn default_scene_uses_grid_sized_to_bounds() {
    let scene = Scene::default();
    assert_eq!(scene.background(), Background::Grid);
    assert_eq!(scene.world_size(), (4000.0, 4000.0));
    assert!(scene.segments().is_empty());
}

#[test]
fn image_background_sets_world_size() {
    let mut scene = Scene::default();
    scene.set_image_background(4330.0, 2964.0);
    assert_eq!(scene.background(), Background::Image { width: 4330.0, height: 2964.0 });
    assert_eq!(scene.world_size(), (4330.0, 2964.0));

    scene.set_grid_background();
    assert_eq!(scene.world_size(), (4000.0, 4000.0));
}

#[test]
fn empty_image_keeps_grid() {
    let mut scene = Scene::default();
    scene.set_image_background(0.0, 2964.0);
    assert_eq!(scene.background(), Background::Grid);
}

#[test]
fn set_segments_replaces_in_order() {
    let mut scene = Scene::default();
    scene.set_segments(&[seg(1.0, "red"), seg(2.0, "blue")]);
    scene.set_segments(&[seg(3.0, "green"), seg(4.0, "red"), seg(5.0, "blue")]);
    let colors: Vec<&str> = scene.segments().iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, vec!["green", "red", "blue"]);
}

#[test]
fn grid_offsets_cover_extent() {
    assert_eq!(Scene::grid_offsets(1000.0), vec![0.0, 500.0, 1000.0]);
    assert_eq!(Scene::grid_offsets(1200.0), vec![0.0, 500.0, 1000.0, 1200.0]);
    assert!(Scene::grid_offsets(0.0).is_empty());
}

#[test]
fn grid_offsets_stay_bounded_for_huge_extents() {
    let offsets = Scene::grid_offsets(1e20);
    assert_eq!(offsets.len(), MAX_GRID_LINES + 1);
    assert_eq!(offsets.last().copied(), Some(1e20));
}

#[test]
fn grid_offsets_skip_non_finite_extents() {
    assert!(Scene::grid_offsets(f64::INFINITY).is_empty());
    assert!(Scene::grid_offsets(f64::NAN).is_empty());
}

#[test]
fn scene_is_a_segment_sink() {
    let mut controller = DrawController::new(Scene::default());
    controller.on_text_edit("0 0 100 100 red\n10 10 20 20 blue");
    controller.on_draw_requested().expect("valid");
    assert_eq!(controller.sink().segments().len(), 2);

    controller.on_text_edit("broken");
    controller.on_draw_requested().expect_err("one field");
    assert!(controller.sink().segments().is_empty());
}
