// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Vertical hue bar. Hue `0` sits at the bottom edge and the hue grows upwards, reaching
//! `360` (which is `0` again) at the top edge.

use crate::{BoundsSize, FULL_TURN_DEGREES, Point, clamp_to_extent, safe_ratio, wrap_hue};

/// `hue = 360 - clamp(y, 0, height) / height * 360`, wrapped into `[0, 360)`. The `x`
/// coordinate is ignored.
#[must_use]
pub fn hue_from_point(point: Point, bounds: BoundsSize) -> f32 {
    let y = clamp_to_extent(point.y, bounds.height);
    wrap_hue(FULL_TURN_DEGREES - safe_ratio(y, bounds.height) * FULL_TURN_DEGREES)
}

/// `y = height - hue / 360 * height`, horizontally centered on the bar.
#[must_use]
pub fn point_from_hue(hue: f32, bounds: BoundsSize) -> Point {
    let y = bounds.height - wrap_hue(hue) / FULL_TURN_DEGREES * bounds.height;
    Point::new(bounds.width / 2.0, y)
}
