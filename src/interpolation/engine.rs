//! The interpolation entry point: bracket search plus adapter dispatch

use crate::interpolation::timing::Timing;
use crate::keyframe::Keyframe;
use crate::search::{bracket, Bracket};
use crate::value::Interpolable;

/// Interpolate a keyframe sequence at a normalized position.
///
/// The position is clamped to `[0, 1]` before the search; queries outside the
/// recorded keyframe range resolve to the boundary keyframe's value, never an
/// extrapolation. An empty sequence resolves to `adapter.zero()`. The sequence
/// must already be sorted by position.
///
/// A boundary result blends the keyframe's value with itself at `t = 0`, so
/// single-keyframe sequences and out-of-range queries share the same code
/// path as interior ones.
pub fn interpolate<A: Interpolable>(
    keyframes: &[Keyframe<A::Value>],
    position: f64,
    timing: Timing,
    adapter: &A,
) -> A::Value {
    let position = position.clamp(0.0, 1.0);

    match bracket(keyframes, position) {
        None => adapter.zero(),
        Some(Bracket::Edge(k)) => timing.blend(adapter, &k.value, &k.value, 0.0),
        Some(Bracket::Pair(a, b)) => {
            let width = b.position - a.position;
            // A zero-width segment jumps to the later keyframe.
            let t = if width > 0.0 {
                (position - a.position) / width
            } else {
                1.0
            };
            timing.blend(adapter, &a.value, &b.value, t)
        }
    }
}
