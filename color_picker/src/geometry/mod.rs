// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pixel space types used by every picker shape. Positions are `f32` since pointer
//! input from touch screens and high DPI mice is sub-pixel.

// Attach sources.
pub mod bounds_size;
pub mod point;

// Re-export.
pub use bounds_size::*;
pub use point::*;
