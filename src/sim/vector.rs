//! 2D vector used for positions, sizes and speeds
//!
//! Tile units: x grows right, y grows down.

use glam::Vec2;

/// Immutable 2D float pair
pub type Vector = Vec2;

/// Named vector arithmetic. Both return new values.
pub trait VectorOps {
    /// Component-wise sum
    fn plus(self, other: Vector) -> Vector;
    /// Component-wise scale
    fn times(self, factor: f32) -> Vector;
}

impl VectorOps for Vec2 {
    #[inline]
    fn plus(self, other: Vector) -> Vector {
        self + other
    }

    #[inline]
    fn times(self, factor: f32) -> Vector {
        self * factor
    }
}
