// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! An immutable color in Hue, Saturation, Value (and alpha) form.
//!
//! Every constructor and every `with_*` method normalizes its input, so an [`HsvColor`]
//! is always in its documented domain:
//!
//! | Field        | Domain                         |
//! |--------------|--------------------------------|
//! | `hue`        | `[0, 360)` degrees, wraps      |
//! | `saturation` | `[0, 1]`, clamped              |
//! | `value`      | `[0, 1]`, clamped              |
//! | `alpha`      | `[0, 1]`, clamped              |
//!
//! The fields are private to keep that promise. Updates return a new value, the old one
//! is never touched.

use std::fmt::{Display, Formatter};

use crate::{clamp_unit, wrap_hue};

/// See the [module docs](self) for the invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    hue: f32,
    saturation: f32,
    value: f32,
    alpha: f32,
}

impl HsvColor {
    /// Out of range components are wrapped (hue) or clamped (everything else), never
    /// rejected.
    #[must_use]
    pub fn new(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: clamp_unit(saturation),
            value: clamp_unit(value),
            alpha: clamp_unit(alpha),
        }
    }

    /// Fully opaque color.
    #[must_use]
    pub fn new_opaque(hue: f32, saturation: f32, value: f32) -> Self {
        Self::new(hue, saturation, value, 1.0)
    }

    #[must_use]
    pub fn hue(&self) -> f32 { self.hue }

    #[must_use]
    pub fn saturation(&self) -> f32 { self.saturation }

    #[must_use]
    pub fn value(&self) -> f32 { self.value }

    #[must_use]
    pub fn alpha(&self) -> f32 { self.alpha }

    #[must_use]
    pub fn with_hue(&self, hue: f32) -> Self { Self { hue: wrap_hue(hue), ..*self } }

    /// Rotate the hue around the color circle, eg: `350 + 30 = 20`.
    #[must_use]
    pub fn with_hue_shifted(&self, delta_degrees: f32) -> Self {
        self.with_hue(self.hue + delta_degrees)
    }

    #[must_use]
    pub fn with_saturation(&self, saturation: f32) -> Self {
        Self {
            saturation: clamp_unit(saturation),
            ..*self
        }
    }

    #[must_use]
    pub fn with_value(&self, value: f32) -> Self {
        Self {
            value: clamp_unit(value),
            ..*self
        }
    }

    /// Replace saturation and value together, which is what a saturation/value area
    /// reports on every pointer move.
    #[must_use]
    pub fn with_saturation_and_value(&self, saturation: f32, value: f32) -> Self {
        self.with_saturation(saturation).with_value(value)
    }

    #[must_use]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            alpha: clamp_unit(alpha),
            ..*self
        }
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool { self.alpha >= 1.0 }
}

/// Opaque red. Hue `360` wraps to `0`.
impl Default for HsvColor {
    fn default() -> Self { Self::new_opaque(360.0, 1.0, 1.0) }
}

impl Display for HsvColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsva({:.1}°, {:.3}, {:.3}, {:.3})",
            self.hue, self.saturation, self.value, self.alpha
        )
    }
}
