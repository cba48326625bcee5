// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into [`ArgbChannels`].
//! The hex color string can be in the following formats:
//! - `#RRGGBB`, eg: `#FF0000` for opaque red.
//! - `#RRGGBBAA`, eg: `#FF000080` for half transparent red.

use std::fmt::Write as _;

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map_res, opt}};

use super::{ArgbChannels, HsvColor};
use crate::{ColorPickerError, CommonResult};

/// Parse function that generates [`ArgbChannels`] from a hex color string. Alpha defaults
/// to `0xFF` when the `AA` segment is missing. Any trailing input is returned as the
/// remainder.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input does not start with a valid hex color.
pub fn parse_hex_color(input: &str) -> IResult<&str, ArgbChannels> {
    let (input, _) = tag("#").parse(input)?;
    let (input, (red, green, blue)) = (
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    )
        .parse(input)?;
    let (input, maybe_alpha) = opt(helper_fns::parse_hex_seg).parse(input)?;
    Ok((
        input,
        ArgbChannels {
            alpha: maybe_alpha.unwrap_or(0xFF),
            red,
            green,
            blue,
        },
    ))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true` items
    /// will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}

impl HsvColor {
    /// The whole input must be a hex color, trailing characters are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorPickerError::InvalidHexColor`] if the input is not exactly
    /// `#RRGGBB` or `#RRGGBBAA`.
    pub fn try_from_hex_color(input: &str) -> CommonResult<HsvColor> {
        match parse_hex_color(input.trim()) {
            Ok((remainder, channels)) if remainder.is_empty() => {
                Ok(HsvColor::from_packed_color(u32::from(channels)))
            }
            _ => ColorPickerError::new_invalid_hex_color_result(input),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when the color is not fully opaque.
    #[must_use]
    pub fn to_hex_color_string(&self) -> String {
        let ArgbChannels {
            alpha,
            red,
            green,
            blue,
        } = self.to_argb_channels();

        let mut acc = String::with_capacity(9);
        if alpha < 0xFF {
            _ = write!(acc, "#{red:02X}{green:02X}{blue:02X}{alpha:02X}");
        } else {
            _ = write!(acc, "#{red:02X}{green:02X}{blue:02X}");
        }
        acc
    }
}
