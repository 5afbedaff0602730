// Host-side tests for the scroll-progress pipeline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod progress {
    include!("../src/core/progress.rs");
}

use progress::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn section_index_matches_floor_bucketing() {
    let n = 5;
    for step in 0..100 {
        let p = step as f32 / 100.0;
        let expected = ((p * n as f32).floor() as usize).min(n - 1);
        let got = section_index(p, n);
        assert_eq!(got, expected, "p={}", p);
        assert!(got < n);
    }
}

#[test]
fn section_index_upper_boundary_clamps_to_last() {
    assert_eq!(section_index(1.0, 5), 4);
    assert_eq!(section_index(1.0, 1), 0);
    // out-of-range inputs clamp rather than overflow
    assert_eq!(section_index(1.5, 5), 4);
    assert_eq!(section_index(-0.5, 5), 0);
}

#[test]
fn section_index_zero_sections_is_guarded() {
    assert_eq!(section_index(0.0, 0), 0);
    assert_eq!(section_index(0.7, 0), 0);
    assert_eq!(section_index(1.0, 0), 0);
}

#[test]
fn section_index_scroll_scenario() {
    let stream = [0.0, 0.1, 0.49, 0.5, 0.51, 0.99, 1.0];
    let expected = [0, 0, 2, 2, 2, 4, 4];
    let got: Vec<usize> = stream.iter().map(|&p| section_index(p, 5)).collect();
    assert_eq!(got, expected);
}

#[test]
fn scroll_progress_normalizes_against_track_height() {
    assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_out_of_range() {
    assert_eq!(scroll_progress(5000.0, 2000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-50.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn scroll_progress_zero_track_reads_as_top() {
    // document shorter than (or equal to) the viewport
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(100.0, 500.0, 800.0), 0.0);
}

#[test]
fn scroll_progress_follows_remeasured_metrics() {
    // a resize changes the track without moving scroll_y; the derived
    // progress (and with it the section index) must follow the new metrics
    let before = scroll_progress(400.0, 2000.0, 1000.0);
    let after = scroll_progress(400.0, 2000.0, 1600.0);
    assert_eq!(before, 0.4);
    assert_eq!(after, 1.0);
    assert_ne!(section_index(before, 5), section_index(after, 5));
}

#[test]
fn spring_converges_and_snaps_to_target() {
    let mut spring = Spring::new(100.0, 30.0, 0.001, 0.0);
    for _ in 0..600 {
        spring.step(1.0, DT);
    }
    // after the rest threshold is crossed the value snaps exactly
    assert_eq!(spring.value(), 1.0);
}

#[test]
fn spring_is_overdamped_at_page_tuning() {
    // damping 30 over stiffness 100 is past critical; no overshoot expected
    let mut spring = Spring::new(100.0, 30.0, 0.001, 0.0);
    let mut prev = 0.0;
    for _ in 0..600 {
        let v = spring.step(1.0, DT);
        assert!(v <= 1.0 + 1e-4, "overshoot: {}", v);
        assert!(v >= prev - 1e-4, "non-monotonic: {} -> {}", prev, v);
        prev = v;
    }
}

#[test]
fn spring_ignores_non_positive_dt() {
    let mut spring = Spring::new(100.0, 30.0, 0.001, 0.25);
    assert_eq!(spring.step(1.0, 0.0), 0.25);
    assert_eq!(spring.step(1.0, -DT), 0.25);
}

#[test]
fn spring_substeps_long_frames_without_blowing_up() {
    // a single 2-second frame must not destabilize the integration
    let mut spring = Spring::new(100.0, 30.0, 0.001, 0.0);
    let v = spring.step(1.0, 2.0);
    assert!(v.is_finite());
    assert!((0.0..=1.0 + 1e-3).contains(&v));
}

#[test]
fn spring_at_rest_stays_at_rest() {
    let mut spring = Spring::new(100.0, 30.0, 0.001, 0.5);
    for _ in 0..10 {
        assert_eq!(spring.step(0.5, DT), 0.5);
    }
}
