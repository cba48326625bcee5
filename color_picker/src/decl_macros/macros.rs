// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Default tolerance used by [`assert_approx_eq!`] when none is given. Pixel positions
/// and hue angles computed with `f32` trig are accurate to well below this.
pub const DEFAULT_FLOAT_TOLERANCE: f32 = 1e-3;

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Assert that two `f32` values are within a tolerance of each other.
///
/// ```
/// use r3bl_color_picker::assert_approx_eq;
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(10.0, 10.4, 0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::DEFAULT_FLOAT_TOLERANCE)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right, tolerance): (f32, f32, f32) = ($left, $right, $tolerance);
        assert!(
            (left - right).abs() <= tolerance,
            "\nleft : `{}` = {}\nright: `{}` = {}\ntolerance: {}",
            stringify!($left),
            left,
            stringify!($right),
            right,
            tolerance
        );
    }};
}

/// Assert that two hue angles (in degrees) are within a tolerance of each other on the
/// hue circle, so `359.9` and `0.0` are treated as neighbors.
#[macro_export]
macro_rules! assert_hue_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_hue_approx_eq!($left, $right, $crate::DEFAULT_FLOAT_TOLERANCE)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right, tolerance): (f32, f32, f32) = ($left, $right, $tolerance);
        let diff = (left - right).rem_euclid(360.0);
        let distance = diff.min(360.0 - diff);
        assert!(
            distance <= tolerance,
            "\nleft hue : `{}` = {}\nright hue: `{}` = {}\ntolerance: {}",
            stringify!($left),
            left,
            stringify!($right),
            right,
            tolerance
        );
    }};
}
