// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{ColorPickerError, CommonResult, HarmonyMode, HsvColor, MAX_WHEEL_DIAMETER};

pub const DEFAULT_INITIAL_COLOR: &str = "#FF0000";

/// Configuration shared by [`crate::DiscColorPicker`] and [`crate::HarmonyColorPicker`].
/// Every field is optional in JSON, missing ones take their default.
///
/// ```
/// use r3bl_color_picker::{HarmonyMode, PickerConfig};
///
/// let config = PickerConfig::try_from_json_str(r#"{ "harmony_mode": "Triadic" }"#).unwrap();
/// assert_eq!(config.harmony_mode, HarmonyMode::Triadic);
/// assert_eq!(config.initial_color, "#FF0000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    pub harmony_mode: HarmonyMode,
    /// `#RRGGBB` or `#RRGGBBAA`.
    pub initial_color: String,
    /// Diameter of the color wheel in pixels. `0` means "unknown until the first layout".
    /// At most [`MAX_WHEEL_DIAMETER`].
    pub wheel_diameter: usize,
    pub show_alpha_bar: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            harmony_mode: HarmonyMode::default(),
            initial_color: DEFAULT_INITIAL_COLOR.to_string(),
            wheel_diameter: 0,
            show_alpha_bar: true,
        }
    }
}

impl PickerConfig {
    /// Parse and validate a JSON config. The `initial_color` must be a valid hex color.
    ///
    /// # Errors
    ///
    /// - [`ColorPickerError::InvalidConfig`] if the JSON is malformed, has unknown fields,
    ///   a field has the wrong type, or `wheel_diameter` is larger than
    ///   [`MAX_WHEEL_DIAMETER`].
    /// - [`ColorPickerError::InvalidHexColor`] if `initial_color` can't be parsed.
    #[tracing::instrument(skip(json))]
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let config: PickerConfig =
            serde_json::from_str(json).map_err(|err| ColorPickerError::InvalidConfig {
                reason: err.to_string(),
            })?;

        if config.wheel_diameter > MAX_WHEEL_DIAMETER {
            return Err(ColorPickerError::InvalidConfig {
                reason: format!(
                    "wheel_diameter {} is larger than {MAX_WHEEL_DIAMETER}",
                    config.wheel_diameter
                ),
            }
            .into());
        }

        // Validate eagerly, so a bad color surfaces at load time.
        config.initial_hsv_color()?;

        tracing::debug!(message = "Loaded picker config", config = ?config);
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ColorPickerError::InvalidConfig`] if serialization fails.
    pub fn to_json_string(&self) -> CommonResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ColorPickerError::InvalidConfig {
                reason: err.to_string(),
            }
            .into()
        })
    }

    /// # Errors
    ///
    /// Returns [`ColorPickerError::InvalidHexColor`] if `initial_color` can't be parsed.
    pub fn initial_hsv_color(&self) -> CommonResult<HsvColor> {
        HsvColor::try_from_hex_color(&self.initial_color)
    }
}
