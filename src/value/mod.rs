//! Value types and interpolation adapters

pub mod adapter;
pub mod color;
pub mod scalar;
pub mod vector2;
pub mod vector3;

pub use adapter::*;
pub use color::*;
pub use scalar::*;
pub use vector2::*;
pub use vector3::*;
