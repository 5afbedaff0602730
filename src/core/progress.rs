/// Spring-smoothed scalar signal.
///
/// Integrates a damped spring toward a moving target once per frame:
/// `accel = stiffness * (target - value) - damping * velocity`. Long frames
/// are sub-stepped so the explicit integration stays stable, and once both
/// the distance to the target and the velocity fall inside `rest_delta` the
/// spring snaps to the target and stops moving.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub rest_delta: f32,
    value: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32, rest_delta: f32, initial: f32) -> Self {
        Self {
            stiffness,
            damping,
            rest_delta,
            value: initial,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        if dt_sec <= 0.0 {
            return self.value;
        }
        const MAX_SUBSTEP_SEC: f32 = 1.0 / 60.0;
        let mut remaining = dt_sec;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SEC);
            let accel = self.stiffness * (target - self.value) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if (target - self.value).abs() < self.rest_delta && self.velocity.abs() < self.rest_delta {
            self.value = target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Map continuous progress in [0,1] to a discrete section index in [0, n).
///
/// `progress == 1.0` lands on the last section, not one past it, and
/// `section_count == 0` falls back to 0 rather than dividing the range.
#[inline]
pub fn section_index(progress: f32, section_count: usize) -> usize {
    if section_count == 0 {
        return 0;
    }
    let idx = (progress.clamp(0.0, 1.0) * section_count as f32).floor() as usize;
    idx.min(section_count - 1)
}

/// Normalized scroll progress from raw scroll metrics.
///
/// A page with no scrollable height reads as "top of page".
#[inline]
pub fn scroll_progress(scroll_y: f32, document_height: f32, viewport_height: f32) -> f32 {
    let track = document_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_y / track).clamp(0.0, 1.0)
}
