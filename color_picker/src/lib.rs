// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_picker
//!
//! Headless core for HSV color pickers: disc pickers (hue ring + saturation/value area),
//! harmony pickers (a color wheel with brightness), and plain hue bars. There is no
//! drawing code in this crate. A UI layer (terminal, GPU, mobile toolkit, anything)
//! reports pointer positions in pixel coordinates, and gets [`HsvColor`] values back.
//!
//! The crate is organized in layers, from leaf to root:
//!
//! 1. [`hsv`] - The immutable [`HsvColor`] value type, conversions to and from packed
//!    ARGB and hex strings, and [`HarmonyMode`] palette derivation.
//! 2. [`mapping`] - Pure functions that convert a [`Point`] inside [`BoundsSize`] into an
//!    HSV component, and back. One module per picker shape:
//!    - [`mapping::hue_bar`] - vertical linear hue bar.
//!    - [`mapping::hue_ring`] - annular hue ring.
//!    - [`mapping::disc_area`] - polar hue/saturation disc used by color wheels.
//!    - [`mapping::saturation_value_box`] - square saturation/value area.
//! 3. [`color_wheel_raster`] - A precomputed pixel buffer of the color wheel, and a cache
//!    that swaps it out atomically when the wheel is resized.
//! 4. [`picker`] - Controllers that glue pointer events to the layers above, plus the
//!    JSON [`PickerConfig`].
//!
//! Ambient functionality lives in [`common`] (errors, float helpers), [`log`] (tracing
//! setup) and [`decl_macros`].
//!
//! # Example
//!
//! ```
//! use r3bl_color_picker::{BoundsSize, HarmonyMode, HsvColor, Point, mapping::hue_ring};
//!
//! let red = HsvColor::from_packed_color(0xFF_FF_00_00);
//! let palette = red.harmony_colors(HarmonyMode::Triadic);
//! assert_eq!(palette.len(), 2);
//!
//! let bounds = BoundsSize::new(200.0, 200.0);
//! let hue = hue_ring::hue_from_point(Point::new(200.0, 100.0), bounds);
//! assert!(hue.abs() < 0.001);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod color_wheel_raster;
pub mod common;
pub mod decl_macros;
pub mod geometry;
pub mod hsv;
pub mod log;
pub mod mapping;
pub mod picker;

// Re-export.
pub use color_wheel_raster::*;
pub use common::*;
pub use decl_macros::*;
pub use geometry::*;
pub use hsv::*;
pub use log::*;
pub use picker::*;
