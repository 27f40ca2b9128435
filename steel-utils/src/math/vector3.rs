//! A generic three component vector.

use std::ops::{Add, Mul, Sub};

/// A three component vector, used for block coordinates (`i32`) and
/// world positions (`f64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector3<T> {
    /// The x component.
    pub x: T,
    /// The y component.
    pub y: T,
    /// The z component.
    pub z: T,
}

impl<T> Vector3<T> {
    /// Creates a new vector.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Add<Output = T>> Vector3<T> {
    /// Returns the component-wise sum of two vectors.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Copy + Sub<Output = T>> Vector3<T> {
    /// Returns the component-wise difference of two vectors.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Copy + Mul<Output = T>> Vector3<T> {
    /// Scales every component by `factor`.
    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Vector3<f64> {
    /// Returns the center of the block at the given coordinates.
    #[must_use]
    pub fn block_center(x: i32, y: i32, z: i32) -> Self {
        Self::new(
            f64::from(x) + 0.5,
            f64::from(y) + 0.5,
            f64::from(z) + 0.5,
        )
    }
}
