use crate::interpolation::Timing;
use crate::keyframe::Keyframe;

/// Capability trait for interpolable value types.
///
/// An adapter teaches the engine how to blend one value representation. The
/// engine assumes nothing about `Value` beyond these three operations, so any
/// caller-defined adapter works: a discrete alphabet, a quaternion with
/// shortest-arc blending, whatever the domain needs. Adapters are passed
/// explicitly per call and carry no state of their own; reference adapters
/// are unit structs ([`ScalarAdapter`](crate::ScalarAdapter),
/// [`Vector2Adapter`](crate::Vector2Adapter),
/// [`Vector3Adapter`](crate::Vector3Adapter)).
pub trait Interpolable {
    /// The value representation this adapter blends
    type Value;

    /// The neutral value, returned for empty sequences
    fn zero(&self) -> Self::Value;

    /// Blend `a` toward `b` at constant rate, `t` in `[0, 1]`
    fn linear_interpolate(&self, a: &Self::Value, b: &Self::Value, t: f64) -> Self::Value;

    /// Blend `a` toward `b` with ease-in/ease-out, `t` in `[0, 1]`
    fn smooth_interpolate(&self, a: &Self::Value, b: &Self::Value, t: f64) -> Self::Value;

    /// Interpolate a keyframe sequence at a normalized position using this
    /// adapter. Convenience for [`interpolate`](crate::interpolate).
    #[inline]
    fn keyframe_interpolate(
        &self,
        keyframes: &[Keyframe<Self::Value>],
        position: f64,
        timing: Timing,
    ) -> Self::Value
    where
        Self: Sized,
    {
        crate::interpolation::interpolate(keyframes, position, timing, self)
    }
}
