// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Colors to paint the track of a hue bar (top to bottom) or a hue ring (sweep). The
//! track runs from high hues to low hues, which matches [`crate::mapping::hue_bar`]:
//! hues fall from just under `360` below the top edge to `0` at the bottom edge. The top
//! edge itself wraps to `0`, so both ends of the track are red.
//!
//! Interpolation between the stops is done with [`colorgrad`].

use colorgrad::Gradient;
use smallvec::SmallVec;

use crate::{ArgbChannels, FULL_TURN_DEGREES, HsvColor};

/// Number of colors that fit in [`VecHueTrackColors`] without a heap allocation.
pub const DEFAULT_HUE_TRACK_STEPS: usize = 64;

/// Sized to allow for stack allocation rather than heap allocation. If for some reason
/// this is exceeded, then it will [`smallvec::SmallVec::spilled`] over into the heap.
pub type VecHueTrackColors = SmallVec<[u32; DEFAULT_HUE_TRACK_STEPS]>;

/// The 12 rainbow stops of the hue track, in track order (high hues first).
const HUE_TRACK_STOPS: [&str; 12] = [
    "#FF0040", "#FF00FF", "#8000FF", "#0000FF", "#0080FF", "#00FFFF", "#00FF80",
    "#00FF00", "#80FF00", "#FFFF00", "#FF8000", "#FF0000",
];

#[must_use]
pub fn hue_track_stops() -> &'static [&'static str] { &HUE_TRACK_STOPS }

/// `steps` packed `0xAARRGGBB` colors evenly spaced along the hue track, first and last
/// stop included.
#[must_use]
pub fn generate_hue_track_gradient(steps: usize) -> VecHueTrackColors {
    let result_gradient = colorgrad::GradientBuilder::new()
        .html_colors(&HUE_TRACK_STOPS)
        .build::<colorgrad::LinearGradient>();

    match result_gradient {
        Ok(gradient) => (0..steps)
            .map(|step| {
                let fraction = track_fraction(step, steps);
                let [red, green, blue, alpha] = gradient.at(fraction).to_rgba8();
                u32::from(ArgbChannels {
                    alpha,
                    red,
                    green,
                    blue,
                })
            })
            .collect(),
        Err(error) => {
            tracing::debug!(
                message = "Hue track gradient could not be built, falling back to HSV",
                error = %error
            );
            generate_hsv_hue_track(steps)
        }
    }
}

/// Same track computed directly from fully saturated HSV colors.
#[must_use]
pub fn generate_hsv_hue_track(steps: usize) -> VecHueTrackColors {
    (0..steps)
        .map(|step| {
            let hue = (1.0 - track_fraction(step, steps)) * FULL_TURN_DEGREES;
            HsvColor::new_opaque(hue, 1.0, 1.0).to_packed_color()
        })
        .collect()
}

/// Position of `step` along the track in `[0, 1]`.
#[allow(clippy::cast_precision_loss)]
fn track_fraction(step: usize, steps: usize) -> f32 {
    if steps <= 1 {
        0.0
    } else {
        step as f32 / (steps - 1) as f32
    }
}
