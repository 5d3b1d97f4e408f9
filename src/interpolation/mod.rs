//! Interpolation over keyframe sequences

pub mod engine;
pub mod timing;

pub use engine::*;
pub use timing::*;
