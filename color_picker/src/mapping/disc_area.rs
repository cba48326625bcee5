// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Polar hue / saturation disc, the geometry behind the color wheel.
//!
//! - The hue is the standard screen angle `atan2(dy, dx)`, normalized into `[0, 360)`.
//!   Hue `0` is at the right edge and, since screen `y` grows downwards, the hue grows
//!   clockwise on screen (`90` at the bottom).
//! - The saturation is the distance from the center divided by the radius, so `0` at the
//!   center and `1` on the rim.
//! - The value is not encoded by the disc. The caller supplies it.
//!
//! Unlike the other shapes the pointer is **not** clamped into the bounds: any position
//! further than the radius from the center maps to [`None`].

use crate::{BoundsSize, HsvColor, Point, safe_ratio, wrap_hue};

/// `(hue, saturation)` for a position inside the disc, or [`None`] if the position is
/// outside of it (or not a finite position, or the bounds have no area).
#[must_use]
pub fn hue_saturation_from_point(point: Point, bounds: BoundsSize) -> Option<(f32, f32)> {
    if !point.is_valid() || !bounds.has_area() {
        return None;
    }

    let offset = point - bounds.center();
    let distance = offset.magnitude();
    let radius = bounds.radius();
    if distance > radius {
        return None;
    }

    let hue = wrap_hue(offset.y.atan2(offset.x).to_degrees() + 360.0);
    let saturation = safe_ratio(distance, radius);
    Some((hue, saturation))
}

/// Opaque color at a position inside the disc, with the supplied `value`.
#[must_use]
pub fn color_from_point(
    point: Point,
    bounds: BoundsSize,
    value: f32,
) -> Option<HsvColor> {
    hue_saturation_from_point(point, bounds)
        .map(|(hue, saturation)| HsvColor::new_opaque(hue, saturation, value))
}

/// Where the indicator for `color` sits on the disc. Only the hue and saturation matter.
#[must_use]
pub fn point_from_color(color: HsvColor, bounds: BoundsSize) -> Point {
    let radians = color.hue().to_radians();
    let saturation = color.saturation();
    Point::new(
        (saturation * radians.cos() + 1.0) / 2.0 * bounds.width,
        (saturation * radians.sin() + 1.0) / 2.0 * bounds.height,
    )
}
