// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::Point;
use crate::clamp_to_extent;

/// Width and height of a picker component in pixels. Square for rings, discs and wheels.
/// A thin rectangle for linear bars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundsSize {
    pub width: f32,
    pub height: f32,
}

impl BoundsSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self { Self { width, height } }

    /// A `diameter x diameter` square, as used by the color wheel raster.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new_square(diameter: usize) -> Self {
        let it = diameter as f32;
        Self::new(it, it)
    }

    #[must_use]
    pub fn center(&self) -> Point { Point::new(self.width / 2.0, self.height / 2.0) }

    /// Radius of the circle inscribed in these bounds.
    #[must_use]
    pub fn radius(&self) -> f32 { self.width.min(self.height) / 2.0 }

    /// Pin the point to the closest position inside these bounds (edges included).
    #[must_use]
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            clamp_to_extent(point.x, self.width),
            clamp_to_extent(point.y, self.height),
        )
    }

    /// Is there any area to map pointer input onto?
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

impl From<(f32, f32)> for BoundsSize {
    fn from((width, height): (f32, f32)) -> Self { Self::new(width, height) }
}

impl Display for BoundsSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.1} x {:.1}]", self.width, self.height)
    }
}
