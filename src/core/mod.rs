pub mod constants;
pub mod content;
pub mod progress;
pub mod visual;
