//! Keyframe Interpolation Engine
//!
//! A pure, stateless keyframe interpolation library: logarithmic segment
//! search over a sorted keyframe sequence combined with pluggable value
//! blending. Value types participate through the [`Interpolable`] capability
//! trait, so the same engine interpolates scalars, vectors, colors, or any
//! caller-defined representation.

pub mod error;
pub mod interpolation;
pub mod keyframe;
pub mod search;
pub mod value;

// Re-export common types for convenience
pub use error::KeyframeError;
pub use interpolation::{interpolate, Timing};
pub use keyframe::{sort_keyframes, validate_keyframes, Keyframe};
pub use search::{bracket, bracket_by, find, find_by, Bracket};
pub use value::{Interpolable, ScalarAdapter, Vector2, Vector2Adapter, Vector3, Vector3Adapter};

/// Keyframe engine result type
pub type Result<T> = core::result::Result<T, KeyframeError>;
