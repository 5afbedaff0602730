// Authored look-and-feel constants shared by the renderer and frame loop.

/// Gradient palettes cycled by section index (drawn as 45-degree linear
/// gradients on the blob surface).
pub const PALETTES: [[&str; 3]; 5] = [
    ["#FF6B6B", "#4ECDC4", "#FFE66D"], // intro
    ["#EF4444", "#F87171", "#FCA5A5"], // apple red
    ["#3B82F6", "#60A5FA", "#93C5FD"], // line/point blue
    ["#10B981", "#34D399", "#6EE7B7"], // watermelon green
    ["#000000", "#333333", "#666666"], // gestalt dark
];

/// Floating text fragments orbiting the blob, paired positionally with
/// `visual::PARTICLE_FACTORS`.
pub const PARTICLE_LABELS: [&str; 3] = ["DIFFERENT", "CREA", "PROACH"];

pub const SITE_TITLE: &str = "COCODIO LAB";

pub const NAV_LINK_LABEL: &str = "Sauce";
pub const NAV_LINK_URL: &str =
    "https://drive.google.com/file/d/13HUmXlHjRy_l9aSWm8ORdSQZtqYdLmDk/view?usp=sharing";

/// Each chapter's decorative background ring is rotated by this step times
/// the section index.
pub const DECOR_RING_STEP_DEG: f32 = 45.0;
