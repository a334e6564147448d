// Host-side tests for the CSS transform formatter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod transform {
    include!("../src/transform.rs");
}

use glam::DVec2;
use transform::*;

#[test]
fn formats_integral_offsets_without_decimals() {
    let mut css = String::new();
    write_translate(&mut css, DVec2::new(100.0, -40.0));
    assert_eq!(css, "translate(100px, -40px)");
}

#[test]
fn keeps_sub_pixel_offsets() {
    let mut css = String::new();
    write_translate(&mut css, DVec2::new(-12.5, 0.25));
    assert_eq!(css, "translate(-12.5px, 0.25px)");
}

#[test]
fn rewrites_the_same_buffer_each_frame() {
    let mut css = String::with_capacity(48);
    write_translate(&mut css, DVec2::new(1.0, 2.0));
    let cap = css.capacity();
    write_translate(&mut css, DVec2::new(0.0, 0.0));
    assert_eq!(css, "translate(0px, 0px)");
    assert_eq!(css.capacity(), cap);
}
