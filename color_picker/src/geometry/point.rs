// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::{Add, Sub}};

/// A position in pixels, relative to the top left corner of a picker component. `y` grows
/// downwards, like it does on every screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Pointer input can be garbage (NaN) when a gesture is cancelled mid flight.
    #[must_use]
    pub fn is_valid(&self) -> bool { self.x.is_finite() && self.y.is_finite() }

    /// Euclidean distance from the origin.
    #[must_use]
    pub fn magnitude(&self) -> f32 { self.x.hypot(self.y) }
}

mod point_impl {
    use super::{Add, Display, Formatter, Point, Sub};

    impl From<(f32, f32)> for Point {
        fn from((x, y): (f32, f32)) -> Self { Self::new(x, y) }
    }

    impl Add for Point {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output { Self::new(self.x + rhs.x, self.y + rhs.y) }
    }

    impl Sub for Point {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output { Self::new(self.x - rhs.x, self.y - rhs.y) }
    }

    impl Display for Point {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "({:.2}, {:.2})", self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq, assert_eq2};

    #[test]
    fn test_add_sub() {
        let a = Point::new(1.0, 2.0);
        let b = Point::from((3.0, 5.0));
        assert_eq2!(a + b, Point::new(4.0, 7.0));
        assert_eq2!(b - a, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_is_valid() {
        assert!(Point::new(0.0, 0.0).is_valid());
        assert!(!Point::new(f32::NAN, 0.0).is_valid());
        assert!(!Point::new(0.0, f32::INFINITY).is_valid());
    }

    #[test]
    fn test_magnitude() {
        assert_approx_eq!(Point::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_display() {
        assert_eq2!(Point::new(1.0, 2.5).to_string(), "(1.00, 2.50)");
    }
}
