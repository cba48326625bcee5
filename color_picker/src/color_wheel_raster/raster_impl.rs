// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BoundsSize, HsvColor, Point, TRANSPARENT_PACKED_COLOR, mapping::disc_area};

/// Value (brightness) the raster is always built with. Brightness changes are applied on
/// top of the raster by the harmony picker, so the raster never has to be rebuilt for
/// them.
pub const RASTER_VALUE: f32 = 1.0;

/// Largest wheel the raster is built for, `4096 x 4096` pixels is 64 MiB. Larger
/// diameters are clamped to this.
pub const MAX_WHEEL_DIAMETER: usize = 4096;

/// Row major `diameter x diameter` buffer of packed `0xAARRGGBB` pixels.
///
/// The pixel at `(x, y)` holds the color that [`disc_area::color_from_point`] returns for
/// the position `(x, y)` in a `diameter x diameter` square. Pixels outside the circle are
/// [`TRANSPARENT_PACKED_COLOR`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorWheelRaster {
    diameter: usize,
    pixels: Vec<u32>,
}

impl ColorWheelRaster {
    /// Render the whole wheel. `O(diameter²)`, so build it once per size and share it via
    /// [`crate::ColorWheelRasterCache`]. The `diameter` is clamped to
    /// [`MAX_WHEEL_DIAMETER`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build(diameter: usize, value: f32) -> Self {
        let diameter = diameter.min(MAX_WHEEL_DIAMETER);
        let bounds = BoundsSize::new_square(diameter);
        let mut pixels = Vec::with_capacity(diameter * diameter);

        for y in 0..diameter {
            for x in 0..diameter {
                let position = Point::new(x as f32, y as f32);
                let pixel = disc_area::color_from_point(position, bounds, value)
                    .map_or(TRANSPARENT_PACKED_COLOR, |color| color.to_packed_color());
                pixels.push(pixel);
            }
        }

        tracing::debug!(
            message = "ColorWheelRaster::build",
            diameter = diameter,
            value = value,
            pixel_count = pixels.len()
        );

        Self { diameter, pixels }
    }

    /// Same as [`Self::build`] with [`RASTER_VALUE`].
    #[must_use]
    pub fn build_at_full_value(diameter: usize) -> Self {
        Self::build(diameter, RASTER_VALUE)
    }

    /// An empty raster, used before the first layout pass.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            diameter: 0,
            pixels: Vec::new(),
        }
    }

    #[must_use]
    pub fn diameter(&self) -> usize { self.diameter }

    #[must_use]
    pub fn pixels(&self) -> &[u32] { &self.pixels }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.pixels.is_empty() }

    /// Packed pixel at integer coordinates, if they are inside the buffer.
    #[must_use]
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.diameter || y >= self.diameter {
            return None;
        }
        self.pixels.get(y * self.diameter + x).copied()
    }

    /// Color under a pointer position. The position is truncated to integer pixel
    /// coordinates. Returns [`None`] outside the buffer, or on a pixel that is not fully
    /// opaque (ie: outside the wheel).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lookup(&self, point: Point) -> Option<HsvColor> {
        if !point.is_valid() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let pixel = self.pixel_at(point.x as usize, point.y as usize)?;
        if pixel >> 24 != 0xFF {
            return None;
        }
        Some(HsvColor::from_packed_color(pixel))
    }
}

impl Default for ColorWheelRaster {
    fn default() -> Self { Self::empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq, assert_eq2, assert_hue_approx_eq};

    #[test]
    fn test_dimensions() {
        let raster = ColorWheelRaster::build_at_full_value(100);
        assert_eq2!(raster.diameter(), 100);
        assert_eq2!(raster.pixels().len(), 100 * 100);
    }

    #[test]
    fn test_center_is_white() {
        let raster = ColorWheelRaster::build_at_full_value(100);
        let color = raster.lookup(Point::new(50.0, 50.0)).unwrap();
        assert_approx_eq!(color.saturation(), 0.0, 0.01);
        assert_approx_eq!(color.value(), 1.0);
        assert_eq2!(raster.pixel_at(50, 50), Some(0xFF_FF_FF_FF));
    }

    #[test]
    fn test_right_edge_is_saturated_red() {
        let raster = ColorWheelRaster::build_at_full_value(100);
        let color = raster.lookup(Point::new(99.0, 50.0)).unwrap();
        assert_hue_approx_eq!(color.hue(), 0.0, 1.0);
        assert_approx_eq!(color.saturation(), 0.98, 0.01);
    }

    #[test]
    fn test_corners_are_transparent() {
        let raster = ColorWheelRaster::build_at_full_value(100);
        for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
            assert_eq2!(raster.pixel_at(x, y), Some(TRANSPARENT_PACKED_COLOR));
        }
        assert_eq2!(raster.lookup(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_lookup_outside_buffer() {
        let raster = ColorWheelRaster::build_at_full_value(10);
        assert_eq2!(raster.lookup(Point::new(10.0, 5.0)), None);
        assert_eq2!(raster.lookup(Point::new(-1.0, 5.0)), None);
        assert_eq2!(raster.lookup(Point::new(f32::INFINITY, 5.0)), None);
        assert_eq2!(raster.pixel_at(3, 10), None);
    }

    #[test]
    fn test_raster_agrees_with_disc_mapping() {
        let diameter = 64;
        let raster = ColorWheelRaster::build(diameter, 0.5);
        let bounds = BoundsSize::new_square(diameter);
        for (x, y) in [(32, 10), (50, 40), (12, 30), (33, 33)] {
            #[allow(clippy::cast_precision_loss)]
            let point = Point::new(x as f32, y as f32);
            let expected = disc_area::color_from_point(point, bounds, 0.5)
                .unwrap()
                .to_packed_color();
            assert_eq2!(raster.pixel_at(x, y), Some(expected));
        }
    }

    #[test]
    fn test_diameter_is_clamped() {
        let raster = ColorWheelRaster::build_at_full_value(usize::MAX);
        assert_eq2!(raster.diameter(), MAX_WHEEL_DIAMETER);
        assert_eq2!(
            raster.pixels().len(),
            MAX_WHEEL_DIAMETER * MAX_WHEEL_DIAMETER
        );
    }

    #[test]
    fn test_empty() {
        let raster = ColorWheelRaster::default();
        assert!(raster.is_empty());
        assert_eq2!(raster.lookup(Point::new(0.0, 0.0)), None);
    }
}
