use crate::value::adapter::Interpolable;
use crate::value::scalar::ScalarAdapter;
use nalgebra::Vector3 as NVector3;
use serde::{Deserialize, Serialize};

/// 3D vector type, doubling as an RGB color with components in `[0, 255]`
/// (see [`color`](crate::value::color) for the string conversions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else {
            Self::zero()
        }
    }
}

impl From<NVector3<f64>> for Vector3 {
    fn from(v: NVector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for NVector3<f64> {
    fn from(v: Vector3) -> Self {
        NVector3::new(v.x, v.y, v.z)
    }
}

/// Adapter for [`Vector3`] values; blends componentwise via [`ScalarAdapter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3Adapter;

impl Interpolable for Vector3Adapter {
    type Value = Vector3;

    #[inline]
    fn zero(&self) -> Vector3 {
        Vector3::zero()
    }

    #[inline]
    fn linear_interpolate(&self, a: &Vector3, b: &Vector3, t: f64) -> Vector3 {
        let scalar = ScalarAdapter;
        Vector3::new(
            scalar.linear_interpolate(&a.x, &b.x, t),
            scalar.linear_interpolate(&a.y, &b.y, t),
            scalar.linear_interpolate(&a.z, &b.z, t),
        )
    }

    #[inline]
    fn smooth_interpolate(&self, a: &Vector3, b: &Vector3, t: f64) -> Vector3 {
        let scalar = ScalarAdapter;
        Vector3::new(
            scalar.smooth_interpolate(&a.x, &b.x, t),
            scalar.smooth_interpolate(&a.y, &b.y, t),
            scalar.smooth_interpolate(&a.z, &b.z, t),
        )
    }
}
