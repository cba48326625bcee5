// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Headless picker controllers. They own the current [`crate::HsvColor`], turn
//! [`PointerEvent`]s into color updates using the [`crate::mapping`] functions, and
//! report every update through an `on_color_changed` callback. Drawing is left to the
//! caller, who gets indicator positions and gradient stops back.
//!
//! ## Organization:
//! - `pointer_event` - [`PointerEvent`], the only input the controllers accept.
//! - `picker_config` - [`PickerConfig`], JSON config shared by both controllers.
//! - `hue_track` - Gradient stops to paint hue bars and rings.
//! - `disc_picker` - [`DiscColorPicker`], hue ring + saturation/value area.
//! - `harmony_picker` - [`HarmonyColorPicker`], color wheel + brightness + harmonies.

// Attach sources.
pub mod disc_picker;
pub mod harmony_picker;
pub mod hue_track;
pub mod picker_config;
pub mod pointer_event;

// Re-export.
pub use disc_picker::*;
pub use harmony_picker::*;
pub use hue_track::*;
pub use picker_config::*;
pub use pointer_event::*;
