// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color harmonies. Given a base [`HsvColor`], each [`HarmonyMode`] derives a fixed,
//! ordered set of related colors. The order is stable so that indicators for harmony
//! colors don't jump around between frames.
//!
//! | Mode                 | Derived hues (base `H`)          | Count |
//! |----------------------|----------------------------------|-------|
//! | `Complementary`      | `H+180`                          | 1     |
//! | `Analogous`          | `H+30`, `H+60`, `H+90`           | 3     |
//! | `SplitComplementary` | `H+150`, `H+210`                 | 2     |
//! | `Triadic`            | `H+120`, `H+240`                 | 2     |
//! | `Tetradic`           | `H+90`, `H+180`, `H+270`         | 3     |
//! | `Monochromatic`      | same hue, `S = min(S + 0.5, 1)`  | 1     |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use super::HsvColor;

/// These are sized to allow for stack allocation rather than heap allocation. No mode
/// produces more than [`sizing::MAX_HARMONY_COLORS`] colors, so these never spill.
pub mod sizing {
    use super::{HsvColor, SmallVec};

    pub const MAX_HARMONY_COLORS: usize = 3;
    pub type VecHarmonyColors = SmallVec<[HsvColor; MAX_HARMONY_COLORS]>;
}

/// Saturation boost applied by [`HarmonyMode::Monochromatic`].
pub const MONOCHROMATIC_SATURATION_BOOST: f32 = 0.5;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum HarmonyMode {
    #[default]
    Complementary,
    Analogous,
    SplitComplementary,
    Triadic,
    Tetradic,
    Monochromatic,
}

impl HarmonyMode {
    /// Hue offsets in degrees, relative to the base hue. Empty for
    /// [`HarmonyMode::Monochromatic`], which keeps the hue and changes saturation.
    #[must_use]
    pub fn hue_offsets(&self) -> &'static [f32] {
        match self {
            HarmonyMode::Complementary => &[180.0],
            HarmonyMode::Analogous => &[30.0, 60.0, 90.0],
            HarmonyMode::SplitComplementary => &[150.0, 210.0],
            HarmonyMode::Triadic => &[120.0, 240.0],
            HarmonyMode::Tetradic => &[90.0, 180.0, 270.0],
            HarmonyMode::Monochromatic => &[],
        }
    }

    /// How many colors [`HsvColor::harmony_colors`] returns for this mode.
    #[must_use]
    pub fn color_count(&self) -> usize {
        match self {
            HarmonyMode::Monochromatic => 1,
            _ => self.hue_offsets().len(),
        }
    }
}

impl HsvColor {
    /// Derive the harmony palette for `mode`. The base color itself is not included.
    /// Value and alpha are carried over unchanged.
    #[must_use]
    pub fn harmony_colors(&self, mode: HarmonyMode) -> sizing::VecHarmonyColors {
        match mode {
            HarmonyMode::Monochromatic => {
                let boosted = (self.saturation() + MONOCHROMATIC_SATURATION_BOOST).min(1.0);
                smallvec::smallvec![self.with_saturation(boosted)]
            }
            _ => mode
                .hue_offsets()
                .iter()
                .map(|offset| self.with_hue_shifted(*offset))
                .collect(),
        }
    }
}
