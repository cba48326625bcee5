// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Float helpers shared by [`crate::HsvColor`] and the [`crate::mapping`] functions. They
//! are all total: NaN and infinities are folded into the valid domain instead of leaking
//! into colors.

/// Number of degrees in a full turn of the hue circle.
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Wrap any angle in degrees into `[0, 360)`.
///
/// ```
/// use r3bl_color_picker::wrap_hue;
/// assert_eq!(wrap_hue(380.0), 20.0);
/// assert_eq!(wrap_hue(-90.0), 270.0);
/// assert_eq!(wrap_hue(360.0), 0.0);
/// ```
#[must_use]
pub fn wrap_hue(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let it = degrees.rem_euclid(FULL_TURN_DEGREES);
    // `rem_euclid` of a tiny negative number rounds up to exactly 360.0 in f32.
    if it >= FULL_TURN_DEGREES { 0.0 } else { it }
}

/// Clamp into `[0, 1]`. NaN becomes 0.
#[must_use]
pub fn clamp_unit(it: f32) -> f32 {
    if it.is_nan() { 0.0 } else { it.clamp(0.0, 1.0) }
}

/// Clamp into `[0, max]`. NaN becomes 0, and a `max` that is not positive collapses the
/// range to `0`.
#[must_use]
pub fn clamp_to_extent(it: f32, max: f32) -> f32 {
    if it.is_nan() || max.is_nan() || max <= 0.0 {
        0.0
    } else {
        it.clamp(0.0, max)
    }
}

/// `numerator / denominator`, or `0` when the denominator is not usable.
#[must_use]
pub fn safe_ratio(numerator: f32, denominator: f32) -> f32 {
    if denominator.is_finite() && denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Convert a unit interval float into a byte using rounding, eg: `0.5` -> `128`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(it: f32) -> u8 { (clamp_unit(it) * 255.0).round() as u8 }

/// Convert a byte into a unit interval float, eg: `255` -> `1.0`.
#[must_use]
pub fn u8_to_unit(it: u8) -> f32 { f32::from(it) / 255.0 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0.0, 0.0)]
    #[test_case(359.5, 359.5)]
    #[test_case(360.0, 0.0)]
    #[test_case(380.0, 20.0)]
    #[test_case(720.0, 0.0)]
    #[test_case(-30.0, 330.0)]
    #[test_case(f32::NAN, 0.0)]
    #[test_case(f32::INFINITY, 0.0)]
    fn test_wrap_hue(input: f32, expected: f32) {
        assert_eq2!(wrap_hue(input), expected);
    }

    #[test]
    fn test_wrap_hue_tiny_negative_stays_in_range() {
        let it = wrap_hue(-1e-7);
        assert!((0.0..FULL_TURN_DEGREES).contains(&it));
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq2!(clamp_unit(-0.5), 0.0);
        assert_eq2!(clamp_unit(0.25), 0.25);
        assert_eq2!(clamp_unit(1.5), 1.0);
        assert_eq2!(clamp_unit(f32::NAN), 0.0);
    }

    #[test]
    fn test_clamp_to_extent() {
        assert_eq2!(clamp_to_extent(-3.0, 10.0), 0.0);
        assert_eq2!(clamp_to_extent(13.0, 10.0), 10.0);
        assert_eq2!(clamp_to_extent(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_safe_ratio() {
        assert_eq2!(safe_ratio(5.0, 10.0), 0.5);
        assert_eq2!(safe_ratio(5.0, 0.0), 0.0);
        assert_eq2!(safe_ratio(5.0, f32::NAN), 0.0);
    }

    #[test]
    fn test_byte_conversions() {
        assert_eq2!(unit_to_u8(1.0), 255);
        assert_eq2!(unit_to_u8(0.5), 128);
        assert_eq2!(unit_to_u8(2.0), 255);
        assert_eq2!(u8_to_unit(255), 1.0);
        assert_eq2!(u8_to_unit(0), 0.0);
    }
}
