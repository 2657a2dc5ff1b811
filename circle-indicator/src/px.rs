//! Physical pixel coordinate types.
//!
//! The host hands the widget an available size in physical pixels; everything
//! derived from it (radius, center, stroke width) lives in `f32` space. This
//! module provides the small integer-pixel vocabulary used at that boundary.
//!
//! The coordinate system has its origin at the top-left corner, with the
//! x-axis increasing to the right and the y-axis increasing downward.

use std::ops::{Add, Div, Mul, Sub};

/// A single physical pixel coordinate value.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Converts the pixel value to `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Returns the smaller of two pixel values.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }

    /// Returns the larger of two pixel values.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Mul<i32> for Px {
    type Output = Px;
    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<i32> for Px {
    type Output = Px;
    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Width in pixels.
    pub width: Px,
    /// Height in pixels.
    pub height: Px,
}

impl PxSize {
    /// A size with zero width and height.
    pub const ZERO: Self = Self {
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Returns the smaller of the two dimensions.
    pub fn min_dimension(self) -> Px {
        self.width.min(self.height)
    }
}

impl From<(i32, i32)> for PxSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(Px(width), Px(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_creation() {
        let px = Px::new(42);
        assert_eq!(px.raw(), 42);

        let px_neg = Px::new(-10);
        assert_eq!(px_neg.0, -10);
    }

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(a * 2, Px(20));
        assert_eq!(a / 2, Px(5));
    }

    #[test]
    fn test_px_min_max() {
        assert_eq!(Px(3).min(Px(7)), Px(3));
        assert_eq!(Px(3).max(Px(7)), Px(7));
    }

    #[test]
    fn test_size_min_dimension() {
        assert_eq!(PxSize::from((200, 100)).min_dimension(), Px(100));
        assert_eq!(PxSize::from((50, 80)).min_dimension(), Px(50));
        assert_eq!(PxSize::ZERO.min_dimension(), Px::ZERO);
    }
}
