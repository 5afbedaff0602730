// Host-side tests for the pure blob-parameter math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod visual {
    include!("../src/core/visual.rs");
}

use glam::Vec2;
use visual::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn scale_hits_its_keyframes() {
    assert!(approx(blob_scale(0.0), 1.0));
    assert!(approx(blob_scale(0.5), 1.5));
    assert!(approx(blob_scale(1.0), 0.8));
}

#[test]
fn scale_is_linear_within_each_segment() {
    assert!(approx(blob_scale(0.25), 1.25));
    assert!(approx(blob_scale(0.75), 1.15));
}

#[test]
fn scale_clamps_outside_the_domain() {
    assert!(approx(blob_scale(-1.0), 1.0));
    assert!(approx(blob_scale(2.0), 0.8));
}

#[test]
fn rotation_is_linear_and_bounded() {
    assert!(approx(blob_rotation_deg(0.0), 0.0));
    assert!(approx(blob_rotation_deg(0.5), 180.0));
    assert!(approx(blob_rotation_deg(1.0), 360.0));
    assert!(approx(blob_rotation_deg(1.5), 360.0));

    let mut prev = -1.0;
    for step in 0..=20 {
        let r = blob_rotation_deg(step as f32 / 20.0);
        assert!(r >= prev);
        prev = r;
    }
}

#[test]
fn interp_degenerate_stop_lists() {
    assert_eq!(interp(&[], 0.5), 0.0);
    assert_eq!(interp(&[(0.3, 7.0)], 0.9), 7.0);
}

#[test]
fn pointer_offset_centers_at_zero() {
    let viewport = Vec2::new(1920.0, 1080.0);
    let offset = pointer_offset(viewport * 0.5, viewport);
    assert!(approx(offset.x, 0.0));
    assert!(approx(offset.y, 0.0));
}

#[test]
fn pointer_offset_spans_the_configured_range() {
    let viewport = Vec2::new(1920.0, 1080.0);
    let corner = pointer_offset(viewport, viewport);
    assert!(approx(corner.x, POINTER_OFFSET_SPAN / 2.0));
    assert!(approx(corner.y, POINTER_OFFSET_SPAN / 2.0));
    let origin = pointer_offset(Vec2::ZERO, viewport);
    assert!(approx(origin.x, -POINTER_OFFSET_SPAN / 2.0));
    assert!(approx(origin.y, -POINTER_OFFSET_SPAN / 2.0));
}

#[test]
fn pointer_offset_guards_zero_viewport() {
    assert_eq!(pointer_offset(Vec2::new(100.0, 100.0), Vec2::ZERO), Vec2::ZERO);
    assert_eq!(
        pointer_offset(Vec2::new(100.0, 100.0), Vec2::new(1920.0, 0.0)),
        Vec2::ZERO
    );
}

#[test]
fn palette_selection_is_periodic() {
    for i in 0..20 {
        assert_eq!(palette_index(i, 5), palette_index(i + 5, 5));
    }
    assert_eq!(palette_index(7, 5), 2);
    assert_eq!(palette_index(3, 0), 0);
}

#[test]
fn ease_in_out_endpoints_and_midpoint() {
    assert!(approx(ease_in_out(0.0), 0.0));
    assert!(approx(ease_in_out(0.5), 0.5));
    assert!(approx(ease_in_out(1.0), 1.0));
}

#[test]
fn morph_loop_starts_and_wraps_on_the_first_keyframe() {
    assert_eq!(morph_radii(0.0, false), MORPH_IDLE[0]);
    assert_eq!(morph_radii(MORPH_PERIOD_SEC, false), MORPH_IDLE[0]);
}

#[test]
fn morph_loop_peaks_on_the_second_keyframe() {
    let mid = morph_radii(MORPH_PERIOD_SEC / 2.0, false);
    for (got, want) in mid.iter().zip(MORPH_IDLE[1].iter()) {
        assert!(approx(*got, *want));
    }
}

#[test]
fn morph_hover_uses_its_own_keyframes() {
    assert_eq!(morph_radii(0.0, true), MORPH_HOVER[0]);
    assert_ne!(morph_radii(0.0, true), morph_radii(0.0, false));
}

#[test]
fn ripple_expands_while_fading() {
    let (s0, o0) = ripple_params(0.0);
    assert!(approx(s0, 0.0));
    assert!(approx(o0, RIPPLE_MAX_OPACITY));

    let (s_mid, o_mid) = ripple_params(RIPPLE_PERIOD_SEC / 2.0);
    assert!(approx(s_mid, RIPPLE_MAX_SCALE / 2.0));
    assert!(approx(o_mid, RIPPLE_MAX_OPACITY / 2.0));
}

#[test]
fn ripple_loops_every_period() {
    let a = ripple_params(0.25);
    let b = ripple_params(0.25 + RIPPLE_PERIOD_SEC);
    assert!(approx(a.0, b.0));
    assert!(approx(a.1, b.1));
}

#[test]
fn echo_eases_in_and_holds() {
    let (s0, o0) = echo_params(0.0);
    assert!(approx(s0, ECHO_SCALE_FROM));
    assert!(approx(o0, 0.0));

    let (s_end, o_end) = echo_params(ECHO_EASE_SEC);
    assert!(approx(s_end, ECHO_SCALE_TO));
    assert!(approx(o_end, ECHO_MAX_OPACITY));

    // holds at the settled state for the rest of the hover
    let (s_hold, o_hold) = echo_params(ECHO_EASE_SEC * 10.0);
    assert!(approx(s_hold, ECHO_SCALE_TO));
    assert!(approx(o_hold, ECHO_MAX_OPACITY));
}
