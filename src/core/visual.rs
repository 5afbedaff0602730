use glam::Vec2;

// Pure visual-parameter math for the centerpiece blob. Everything here is a
// function of (smoothed progress, pointer offset, elapsed time) only, so the
// frame loop can sample it every tick without extra state.

/// Scale keyframes over scroll progress: full size at the top, swollen at the
/// midpoint, receding toward the footer.
pub const SCALE_STOPS: [(f32, f32); 3] = [(0.0, 1.0), (0.5, 1.5), (1.0, 0.8)];

/// One full turn across the whole page.
pub const ROTATION_FULL_DEG: f32 = 360.0;

/// Pointer offset span in CSS pixels (total swing across the viewport).
pub const POINTER_OFFSET_SPAN: f32 = 40.0;

/// Border-radius morph keyframe pairs (8 percentages: 4 horizontal radii then
/// 4 vertical radii). The loop eases A -> B -> A.
pub const MORPH_IDLE: [[f32; 8]; 2] = [
    [60.0, 40.0, 30.0, 70.0, 60.0, 30.0, 70.0, 40.0],
    [40.0, 60.0, 70.0, 30.0, 40.0, 50.0, 60.0, 50.0],
];
pub const MORPH_HOVER: [[f32; 8]; 2] = [
    [40.0, 60.0, 70.0, 30.0, 40.0, 50.0, 60.0, 50.0],
    [30.0, 70.0, 50.0, 50.0, 50.0, 30.0, 70.0, 50.0],
];
pub const MORPH_PERIOD_SEC: f32 = 5.0;

pub const RIPPLE_PERIOD_SEC: f32 = 1.0;
pub const RIPPLE_MAX_SCALE: f32 = 2.0;
pub const RIPPLE_MAX_OPACITY: f32 = 0.5;

pub const ECHO_EASE_SEC: f32 = 0.6;
pub const ECHO_SCALE_FROM: f32 = 0.8;
pub const ECHO_SCALE_TO: f32 = 1.5;
pub const ECHO_MAX_OPACITY: f32 = 0.05;

/// Per-particle multipliers applied to the pointer offset.
pub const PARTICLE_FACTORS: [(f32, f32); 3] = [(-1.0, -1.0), (1.5, -1.5), (-2.0, 2.0)];

/// Piecewise-linear interpolation over ordered `(input, output)` stops.
/// Inputs outside the stop range clamp to the end values.
pub fn interp(stops: &[(f32, f32)], t: f32) -> f32 {
    match stops {
        [] => 0.0,
        [only] => only.1,
        _ => {
            if t <= stops[0].0 {
                return stops[0].1;
            }
            for pair in stops.windows(2) {
                let (x0, y0) = pair[0];
                let (x1, y1) = pair[1];
                if t <= x1 {
                    let span = x1 - x0;
                    if span <= 0.0 {
                        return y1;
                    }
                    let k = (t - x0) / span;
                    return y0 + (y1 - y0) * k;
                }
            }
            stops[stops.len() - 1].1
        }
    }
}

#[inline]
pub fn blob_scale(progress: f32) -> f32 {
    interp(&SCALE_STOPS, progress)
}

#[inline]
pub fn blob_rotation_deg(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0) * ROTATION_FULL_DEG
}

/// Pointer offset in CSS pixels from a raw pointer position and the viewport
/// size. A degenerate viewport yields no offset.
#[inline]
pub fn pointer_offset(pointer: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    (pointer / viewport - Vec2::splat(0.5)) * POINTER_OFFSET_SPAN
}

/// Palette slot for a section; palettes repeat with their own period.
#[inline]
pub fn palette_index(section_index: usize, palette_count: usize) -> usize {
    if palette_count == 0 {
        0
    } else {
        section_index % palette_count
    }
}

/// Quadratic ease-in-out on [0,1].
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Eased ping-pong blend 0 -> 1 -> 0 over a loop period.
#[inline]
pub fn loop_blend(elapsed_sec: f32, period_sec: f32) -> f32 {
    if period_sec <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed_sec / period_sec).fract();
    ease_in_out(1.0 - (2.0 * phase - 1.0).abs())
}

/// Sample the border-radius morph loop at `elapsed_sec`.
pub fn morph_radii(elapsed_sec: f32, hovering: bool) -> [f32; 8] {
    let [a, b] = if hovering { MORPH_HOVER } else { MORPH_IDLE };
    let k = loop_blend(elapsed_sec, MORPH_PERIOD_SEC);
    let mut out = [0.0; 8];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = a[i] + (b[i] - a[i]) * k;
    }
    out
}

/// Inner ripple loop while hovering: `(scale, opacity)` expanding out from the
/// center while fading, restarting every period.
pub fn ripple_params(hover_elapsed_sec: f32) -> (f32, f32) {
    let q = (hover_elapsed_sec.max(0.0) / RIPPLE_PERIOD_SEC).fract();
    (RIPPLE_MAX_SCALE * q, RIPPLE_MAX_OPACITY * (1.0 - q))
}

/// Background echo ring ease-in on hover: `(scale, opacity)` settling at the
/// expanded state until the hover ends.
pub fn echo_params(hover_elapsed_sec: f32) -> (f32, f32) {
    let t = ease_in_out((hover_elapsed_sec.max(0.0) / ECHO_EASE_SEC).clamp(0.0, 1.0));
    (
        ECHO_SCALE_FROM + (ECHO_SCALE_TO - ECHO_SCALE_FROM) * t,
        ECHO_MAX_OPACITY * t,
    )
}
