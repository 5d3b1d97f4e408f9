//! Keyframe type and sequence utilities

use crate::{KeyframeError, Result};
use serde::{Deserialize, Serialize};

/// A single point on an interpolated timeline: a position paired with the
/// value the timeline holds at that position.
///
/// Positions are normalized to `[0, 1]` by convention, but nothing here
/// enforces that; `V` is any type some [`Interpolable`](crate::Interpolable)
/// adapter knows how to blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<V> {
    /// Position of this keyframe on the timeline
    pub position: f64,
    /// Value at this keyframe
    pub value: V,
}

impl<V> Keyframe<V> {
    /// Create a new keyframe
    #[inline]
    pub fn new(position: f64, value: V) -> Self {
        Self { position, value }
    }
}

/// Sort a keyframe sequence by position, in place.
///
/// The engine never sorts implicitly; callers owning an unordered sequence
/// invoke this once before searching. Ordering is total (`f64::total_cmp`),
/// so NaN positions sort deterministically instead of panicking.
#[inline]
pub fn sort_keyframes<V>(keyframes: &mut [Keyframe<V>]) {
    keyframes.sort_by(|a, b| a.position.total_cmp(&b.position));
}

/// Check that a sequence is valid for searching: every position finite and
/// non-decreasing. Ties are permitted.
///
/// Purely a convenience for callers; neither [`bracket`](crate::bracket) nor
/// [`interpolate`](crate::interpolate) calls this.
pub fn validate_keyframes<V>(keyframes: &[Keyframe<V>]) -> Result<()> {
    let mut previous: Option<f64> = None;
    for (index, keyframe) in keyframes.iter().enumerate() {
        if !keyframe.position.is_finite() {
            return Err(KeyframeError::InvalidPosition {
                position: keyframe.position,
            });
        }
        if let Some(previous) = previous {
            if keyframe.position < previous {
                return Err(KeyframeError::UnsortedKeyframe {
                    index,
                    position: keyframe.position,
                    previous,
                });
            }
        }
        previous = Some(keyframe.position);
    }
    Ok(())
}
