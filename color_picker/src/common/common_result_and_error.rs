// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for the outer surfaces of this crate (hex parsing, config loading, log file
//! creation). The color math itself is total and never returns an error; a pointer that
//! misses the color wheel is modeled as [`None`], not as an error.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// It is basically `miette::Result<T, miette::Report>`, and works hand in hand w/
/// [`ColorPickerError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// All the things that can go wrong outside the color math.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq)]
pub enum ColorPickerError {
    #[error("🎨 Could not parse hex color: '{input}'")]
    #[diagnostic(
        code(r3bl_color_picker::invalid_hex_color),
        help("Use the `#RRGGBB` or `#RRGGBBAA` format, eg: `#FF0000` for opaque red")
    )]
    InvalidHexColor { input: String },

    #[error("🧩 Invalid picker config: {reason}")]
    #[diagnostic(
        code(r3bl_color_picker::invalid_config),
        help("The config is a JSON object, see `PickerConfig` for the fields")
    )]
    InvalidConfig { reason: String },

    #[error("📝 Could not create log file: '{path}'")]
    #[diagnostic(
        code(r3bl_color_picker::log_file_could_not_be_created),
        help("Make sure the parent folder exists and is writable")
    )]
    LogFileCouldNotBeCreated { path: String },
}

impl ColorPickerError {
    /// Wrap [`ColorPickerError::InvalidHexColor`] in a [`CommonResult`].
    ///
    /// # Errors
    ///
    /// Always returns an error, this is a constructor for one.
    pub fn new_invalid_hex_color_result<T>(input: &str) -> CommonResult<T> {
        Err(ColorPickerError::InvalidHexColor {
            input: input.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_new_invalid_hex_color_result() {
        let result: CommonResult<()> = ColorPickerError::new_invalid_hex_color_result("#zz");
        let report = result.unwrap_err();
        let maybe_error = report.downcast_ref::<ColorPickerError>();
        assert_eq2!(
            maybe_error,
            Some(&ColorPickerError::InvalidHexColor {
                input: "#zz".to_string()
            })
        );
    }

    #[test]
    fn test_display_message() {
        let error = ColorPickerError::InvalidConfig {
            reason: "missing brace".to_string(),
        };
        assert_eq2!(error.to_string(), "🧩 Invalid picker config: missing brace");
    }
}
