// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`HsvColor`] value type and everything that derives new colors from it.
//!
//! ## Organization:
//! - `hsv_color` - The immutable value type, constructors, functional updates.
//! - `packed_color` - Conversions to and from packed `0xAARRGGBB` integers.
//! - `harmony` - [`HarmonyMode`] and palette derivation.
//! - `hex_color_parser` - `nom` parser for `#RRGGBB` and `#RRGGBBAA` strings.

// Attach sources.
pub mod harmony;
pub mod hex_color_parser;
pub mod hsv_color;
pub mod packed_color;

// Re-export.
pub use harmony::*;
pub use hex_color_parser::*;
pub use hsv_color::*;
pub use packed_color::*;
