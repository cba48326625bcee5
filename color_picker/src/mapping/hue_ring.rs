// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Annular hue ring around a disc picker.
//!
//! The pointer angle is measured with `atan2(x - cx, y - cy)`, ie: with the arguments
//! swapped relative to the usual `atan2(dy, dx)`. That measures angles from the `+y` axis
//! (straight down on screen). The indicator is placed at
//! `center + radius * (sin(θ + 90°), cos(θ + 90°))`.
//!
//! The 90° rotation appears on both sides, added by [`point_from_hue`] and removed by
//! [`hue_from_point`], so that `point_from_hue(hue_from_point(p))` always lands on the
//! ring at the angle of `p`. With this convention hue `0` is at the right edge, and the
//! hue grows counter clockwise on screen (`90` at the top, `270` at the bottom).
//!
//! The ring only encodes hue, so the distance of the pointer from the center is ignored.

use crate::{BoundsSize, Point, wrap_hue};

/// Rotation between the raw `atan2(dx, dy)` angle and the hue.
pub const RING_ROTATION_DEGREES: f32 = 90.0;

/// Raw pointer angle in degrees, normalized into `[0, 360)`. `0` is straight down from
/// the center, `90` is to the right.
#[must_use]
pub fn pointer_angle_degrees(point: Point, bounds: BoundsSize) -> f32 {
    let offset = bounds.clamp_point(point) - bounds.center();
    let degrees = offset.x.atan2(offset.y).to_degrees();
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Hue in `[0, 360)` for a pointer position. The pointer is clamped into `bounds` first.
#[must_use]
pub fn hue_from_point(point: Point, bounds: BoundsSize) -> f32 {
    wrap_hue(pointer_angle_degrees(point, bounds) - RING_ROTATION_DEGREES)
}

/// Where to draw the hue indicator: on the circle inscribed in `bounds`.
#[must_use]
pub fn point_from_hue(hue: f32, bounds: BoundsSize) -> Point {
    let radians = (wrap_hue(hue) + RING_ROTATION_DEGREES).to_radians();
    let radius = bounds.radius();
    bounds.center() + Point::new(radius * radians.sin(), radius * radians.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq, assert_hue_approx_eq};
    use test_case::test_case;

    const RING: BoundsSize = BoundsSize::new(200.0, 200.0);

    #[test_case(200.0, 100.0, 0.0 ; "right")]
    #[test_case(100.0, 0.0, 90.0 ; "top")]
    #[test_case(0.0, 100.0, 180.0 ; "left")]
    #[test_case(100.0, 200.0, 270.0 ; "bottom")]
    fn test_hue_from_point(x: f32, y: f32, expected_hue: f32) {
        assert_hue_approx_eq!(hue_from_point(Point::new(x, y), RING), expected_hue);
    }

    #[test_case(100.0, 200.0, 0.0 ; "down is zero")]
    #[test_case(200.0, 100.0, 90.0 ; "right is ninety")]
    fn test_pointer_angle_degrees(x: f32, y: f32, expected: f32) {
        assert_hue_approx_eq!(pointer_angle_degrees(Point::new(x, y), RING), expected);
    }

    #[test]
    fn test_point_from_hue() {
        let point = point_from_hue(0.0, RING);
        assert_approx_eq!(point.x, 200.0);
        assert_approx_eq!(point.y, 100.0);

        let point = point_from_hue(90.0, RING);
        assert_approx_eq!(point.x, 100.0);
        assert_approx_eq!(point.y, 0.0);
    }

    #[test_case(150.0, 20.0)]
    #[test_case(30.0, 170.0)]
    #[test_case(101.0, 199.0)]
    #[test_case(60.0, 100.0)]
    fn test_forward_of_inverse_keeps_angle_on_ring(x: f32, y: f32) {
        let pointer = Point::new(x, y);
        let indicator = point_from_hue(hue_from_point(pointer, RING), RING);

        // On the ring.
        let indicator_offset = indicator - RING.center();
        assert_approx_eq!(indicator_offset.magnitude(), RING.radius(), 0.01);

        // Same direction as the pointer.
        let pointer_offset = pointer - RING.center();
        let scale = RING.radius() / pointer_offset.magnitude();
        assert_approx_eq!(indicator_offset.x, pointer_offset.x * scale, 0.01);
        assert_approx_eq!(indicator_offset.y, pointer_offset.y * scale, 0.01);
    }

    #[test]
    fn test_off_ring_pointer_is_clamped_first() {
        // Far off to the right and below: clamped to the bottom right corner.
        let hue = hue_from_point(Point::new(1000.0, 1000.0), RING);
        assert_hue_approx_eq!(hue, 315.0);
    }
}
