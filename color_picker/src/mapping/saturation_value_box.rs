// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Square saturation / value area that sits inside the hue ring of a disc picker.
//! Saturation grows left to right, value grows bottom to top. So the top right corner is
//! the fully saturated, fully bright color, and the whole bottom edge is black.

use crate::{BoundsSize, Point, clamp_to_extent, clamp_unit, safe_ratio};

/// `(saturation, value)` for a pointer position, clamped into `bounds` first.
#[must_use]
pub fn saturation_value_from_point(point: Point, bounds: BoundsSize) -> (f32, f32) {
    let x = clamp_to_extent(point.x, bounds.width);
    let y = clamp_to_extent(point.y, bounds.height);
    let saturation = clamp_unit(safe_ratio(x, bounds.width));
    let value = if bounds.height > 0.0 {
        clamp_unit(1.0 - safe_ratio(y, bounds.height))
    } else {
        0.0
    };
    (saturation, value)
}

/// Indicator position: `(saturation * width, (1 - value) * height)`.
#[must_use]
pub fn point_from_saturation_value(
    saturation: f32,
    value: f32,
    bounds: BoundsSize,
) -> Point {
    Point::new(
        clamp_unit(saturation) * bounds.width,
        (1.0 - clamp_unit(value)) * bounds.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq, assert_eq2};
    use test_case::test_case;

    const SQUARE: BoundsSize = BoundsSize::new(100.0, 100.0);

    #[test_case(0.0, 0.0, 0.0, 1.0 ; "top left is white")]
    #[test_case(100.0, 0.0, 1.0, 1.0 ; "top right is pure")]
    #[test_case(0.0, 100.0, 0.0, 0.0 ; "bottom left is black")]
    #[test_case(25.0, 75.0, 0.25, 0.25 ; "inside")]
    fn test_saturation_value_from_point(x: f32, y: f32, saturation: f32, value: f32) {
        assert_eq2!(
            saturation_value_from_point(Point::new(x, y), SQUARE),
            (saturation, value)
        );
    }

    #[test]
    fn test_off_box_drags_are_clamped() {
        assert_eq2!(
            saturation_value_from_point(Point::new(-20.0, 250.0), SQUARE),
            (0.0, 0.0)
        );
        assert_eq2!(
            saturation_value_from_point(Point::new(400.0, -1.0), SQUARE),
            (1.0, 1.0)
        );
    }

    #[test]
    fn test_degenerate_bounds() {
        assert_eq2!(
            saturation_value_from_point(Point::new(3.0, 3.0), BoundsSize::new(0.0, 0.0)),
            (0.0, 0.0)
        );
    }

    #[test]
    fn test_round_trip() {
        for (saturation, value) in [(0.1, 0.9), (0.5, 0.5), (0.83, 0.2)] {
            let point = point_from_saturation_value(saturation, value, SQUARE);
            let (actual_saturation, actual_value) =
                saturation_value_from_point(point, SQUARE);
            assert_approx_eq!(actual_saturation, saturation);
            assert_approx_eq!(actual_value, value);
        }
    }
}
