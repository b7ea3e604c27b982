//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_field::canvas::{self, CanvasSurface};
use particle_field::color::FIELD_PALETTE;
use particle_field::{ParticleBackground, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn creates_missing_canvas_once() {
    let window = canvas::window().unwrap();
    let document = canvas::document(&window).unwrap();
    let first = canvas::find_or_create_canvas(&document, "web-test-canvas", canvas::BACKGROUND_CSS).unwrap();
    let second = canvas::find_or_create_canvas(&document, "web-test-canvas", canvas::BACKGROUND_CSS).unwrap();
    assert!(first.is_same_node(Some(second.as_ref())));
    assert_eq!(first.id(), "web-test-canvas");
}

#[wasm_bindgen_test]
fn background_sets_up_fifty_particles_and_ticks() {
    let mut background = ParticleBackground::new("web-test-background", None).unwrap();
    assert_eq!(background.particle_count(), 50);
    for _ in 0..10 {
        background.tick();
    }
    assert_eq!(background.particle_count(), 50);
    background.resize().unwrap();
    assert_eq!(background.particle_count(), 50);
}

#[wasm_bindgen_test]
fn pointer_moves_cursor_and_follower() {
    let mut background = ParticleBackground::new("web-test-cursor", None).unwrap();
    background.set_cursor(200.0, 100.0);
    assert_eq!((background.cursor_x(), background.cursor_y()), (200.0, 100.0));
    background.tick();
    assert!(background.follower_x() > 0.0 && background.follower_x() < 200.0);
}

#[wasm_bindgen_test]
fn bursts_are_tracked_until_they_fall_away() {
    let mut background = ParticleBackground::new("web-test-confetti", None).unwrap();
    background.burst(50.0, 50.0, Some(15));
    assert_eq!(background.active_bursts(), 1);
    let mut frames = 0;
    while background.active_bursts() > 0 {
        background.tick();
        frames += 1;
        assert!(frames < 20_000, "burst never finished");
    }
}

#[wasm_bindgen_test]
fn confetti_layer_sits_above_the_page_and_field_below() {
    let _background = ParticleBackground::new("web-test-layers", None).unwrap();
    let window = canvas::window().unwrap();
    let document = canvas::document(&window).unwrap();
    let field = document.get_element_by_id("web-test-layers").unwrap();
    let overlay = document.get_element_by_id("web-test-layers-overlay").unwrap();
    assert!(!field.is_same_node(Some(overlay.as_ref())));

    let z_index = |element: web_sys::Element| {
        element
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("z-index")
            .unwrap()
    };
    assert_eq!(z_index(field), "-1");
    assert_eq!(z_index(overlay), "10000");
}

#[wasm_bindgen_test]
fn canvas_surface_accepts_every_call() {
    let window = canvas::window().unwrap();
    let document = canvas::document(&window).unwrap();
    let element = canvas::find_or_create_canvas(&document, "web-test-surface", canvas::BACKGROUND_CSS).unwrap();
    element.set_width(64);
    element.set_height(64);
    let mut surface = CanvasSurface::new(&element).unwrap();

    surface.clear_rect(0.0, 0.0, 64.0, 64.0);
    surface.set_fill_color(FIELD_PALETTE[0]);
    surface.set_global_alpha(0.5);
    surface.fill_circle(32.0, 32.0, 3.0);
    surface.set_stroke_color(FIELD_PALETTE[1]);
    surface.stroke_line([0.0, 0.0], [64.0, 64.0]);
    surface.set_global_alpha(1.0);
    assert_eq!(surface.context.global_alpha(), 1.0);
}
