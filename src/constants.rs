/// Interaction smoothing tuning constants.
///
/// These constants express intended behavior and keep magic numbers out of
/// the frame loop.

// Scroll-progress spring (stiffness/damping formulation)
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 30.0;
pub const SPRING_REST_DELTA: f32 = 0.001;
