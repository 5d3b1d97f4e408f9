use crate::value::adapter::Interpolable;

/// Cubic ease-in/ease-out curve: `3t^2 - 2t^3`.
///
/// Approximates a cosine ramp over `[0, 1]`; agrees with the identity at
/// `t` = 0, 0.5, and 1. Applied as the blend factor by every adapter's
/// `smooth_interpolate`.
#[inline]
pub fn smooth_step(t: f64) -> f64 {
    3.0 * t * t - 2.0 * t * t * t
}

/// Adapter for scalar (`f64`) values.
///
/// The primitive blend everything else delegates to: the vector adapters are
/// defined componentwise in terms of these operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarAdapter;

impl Interpolable for ScalarAdapter {
    type Value = f64;

    #[inline]
    fn zero(&self) -> f64 {
        0.0
    }

    #[inline]
    fn linear_interpolate(&self, a: &f64, b: &f64, t: f64) -> f64 {
        a + t * (b - a)
    }

    #[inline]
    fn smooth_interpolate(&self, a: &f64, b: &f64, t: f64) -> f64 {
        a + smooth_step(t) * (b - a)
    }
}
