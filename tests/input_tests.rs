// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_coordinates_are_relative_to_surface_origin() {
    let p = client_to_surface(Vec2::new(300.0, 220.0), Vec2::new(100.0, 20.0));
    assert_eq!(p, Vec2::new(200.0, 200.0));
}

#[test]
fn full_screen_surface_keeps_client_coordinates() {
    let p = client_to_surface(Vec2::new(12.5, 640.0), Vec2::ZERO);
    assert_eq!(p, Vec2::new(12.5, 640.0));
}

#[test]
fn backing_size_scales_by_pixel_ratio() {
    assert_eq!(backing_size(Vec2::new(1280.0, 720.0), 2.0), (2560, 1440));
    assert_eq!(backing_size(Vec2::new(1280.0, 720.0), 1.0), (1280, 720));
}

#[test]
fn backing_size_never_collapses() {
    assert_eq!(backing_size(Vec2::ZERO, 2.0), (1, 1));
    assert_eq!(backing_size(Vec2::new(-10.0, 50.0), 1.0), (1, 50));
    // Bogus ratios fall back to 1.
    assert_eq!(backing_size(Vec2::new(300.0, 200.0), f64::NAN), (300, 200));
    assert_eq!(backing_size(Vec2::new(300.0, 200.0), 0.0), (300, 200));
}

#[test]
fn scrolled_past_is_negated_wrapper_top() {
    assert_eq!(scrolled_past(120.0), -120.0);
    assert_eq!(scrolled_past(-450.0), 450.0);
}
