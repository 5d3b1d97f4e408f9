use crate::value::adapter::Interpolable;
use crate::value::scalar::ScalarAdapter;
use nalgebra::Vector2 as NVector2;
use serde::{Deserialize, Serialize};

/// 2D vector type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn one() -> Self {
        Self::new(1.0, 1.0)
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len)
        } else {
            Self::zero()
        }
    }
}

impl From<NVector2<f64>> for Vector2 {
    fn from(v: NVector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for NVector2<f64> {
    fn from(v: Vector2) -> Self {
        NVector2::new(v.x, v.y)
    }
}

/// Adapter for [`Vector2`] values; blends componentwise via [`ScalarAdapter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2Adapter;

impl Interpolable for Vector2Adapter {
    type Value = Vector2;

    #[inline]
    fn zero(&self) -> Vector2 {
        Vector2::zero()
    }

    #[inline]
    fn linear_interpolate(&self, a: &Vector2, b: &Vector2, t: f64) -> Vector2 {
        let scalar = ScalarAdapter;
        Vector2::new(
            scalar.linear_interpolate(&a.x, &b.x, t),
            scalar.linear_interpolate(&a.y, &b.y, t),
        )
    }

    #[inline]
    fn smooth_interpolate(&self, a: &Vector2, b: &Vector2, t: f64) -> Vector2 {
        let scalar = ScalarAdapter;
        Vector2::new(
            scalar.smooth_interpolate(&a.x, &b.x, t),
            scalar.smooth_interpolate(&a.y, &b.y, t),
        )
    }
}
