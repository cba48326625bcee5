// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between [`HsvColor`] and packed `0xAARRGGBB` integers (the layout used by
//! most bitmap APIs, and by [`crate::ColorWheelRaster`] pixels).
//!
//! HSV <-> RGB is lossy at the bit level. Going `u32 -> HsvColor -> u32` reproduces each
//! channel to within 1 unit.

use super::HsvColor;
use crate::{FULL_TURN_DEGREES, u8_to_unit, unit_to_u8, wrap_hue};

/// The "no color" pixel. Fully transparent black.
pub const TRANSPARENT_PACKED_COLOR: u32 = 0x00_00_00_00;

/// Unpacked `0xAARRGGBB` channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArgbChannels {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

mod argb_channels_impl {
    use super::ArgbChannels;

    impl From<u32> for ArgbChannels {
        #[allow(clippy::cast_possible_truncation)]
        fn from(argb: u32) -> Self {
            Self {
                alpha: ((argb >> 24) & 0xFF) as u8,
                red: ((argb >> 16) & 0xFF) as u8,
                green: ((argb >> 8) & 0xFF) as u8,
                blue: (argb & 0xFF) as u8,
            }
        }
    }

    impl From<ArgbChannels> for u32 {
        fn from(it: ArgbChannels) -> Self {
            (u32::from(it.alpha) << 24)
                | (u32::from(it.red) << 16)
                | (u32::from(it.green) << 8)
                | u32::from(it.blue)
        }
    }
}

impl HsvColor {
    /// Standard RGB -> HSV conversion. Alpha comes from the packed alpha channel.
    #[must_use]
    pub fn from_packed_color(argb: u32) -> Self {
        let ArgbChannels {
            alpha,
            red,
            green,
            blue,
        } = ArgbChannels::from(argb);
        let (hue, saturation, value) =
            convert::rgb_to_hsv(u8_to_unit(red), u8_to_unit(green), u8_to_unit(blue));
        Self::new(hue, saturation, value, u8_to_unit(alpha))
    }

    /// Standard HSV -> RGB conversion. Every channel, alpha included, is
    /// `round(x * 255)`.
    #[must_use]
    pub fn to_packed_color(&self) -> u32 { u32::from(self.to_argb_channels()) }

    #[must_use]
    pub fn to_argb_channels(&self) -> ArgbChannels {
        let (red, green, blue) =
            convert::hsv_to_rgb(self.hue(), self.saturation(), self.value());
        ArgbChannels {
            alpha: unit_to_u8(self.alpha()),
            red: unit_to_u8(red),
            green: unit_to_u8(green),
            blue: unit_to_u8(blue),
        }
    }
}

/// Unit interval RGB <-> HSV math. Hue in degrees.
pub mod convert {
    use super::{FULL_TURN_DEGREES, wrap_hue};

    #[must_use]
    pub fn rgb_to_hsv(red: f32, green: f32, blue: f32) -> (f32, f32, f32) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let value = max;
        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        #[allow(clippy::float_cmp)]
        let hue = if delta <= 0.0 {
            0.0
        } else if max == red {
            60.0 * ((green - blue) / delta)
        } else if max == green {
            60.0 * ((blue - red) / delta + 2.0)
        } else {
            60.0 * ((red - green) / delta + 4.0)
        };

        (wrap_hue(hue), saturation, value)
    }

    #[must_use]
    pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (f32, f32, f32) {
        if saturation <= 0.0 {
            return (value, value, value);
        }

        let chroma = value * saturation;
        let sector_position = wrap_hue(hue) / (FULL_TURN_DEGREES / 6.0);
        let x = chroma * (1.0 - ((sector_position % 2.0) - 1.0).abs());

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (r1, g1, b1) = match sector_position.floor() as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = value - chroma;
        (r1 + m, g1 + m, b1 + m)
    }
}
