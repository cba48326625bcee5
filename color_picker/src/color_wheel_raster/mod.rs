// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A precomputed square pixel buffer of the color wheel, used by the harmony picker both
//! to draw the wheel and to look up the color under the pointer.
//!
//! ## Organization:
//! - `raster_impl` - [`ColorWheelRaster`], built once per diameter.
//! - `raster_cache` - [`ColorWheelRasterCache`], which rebuilds the raster when the
//!   diameter changes and swaps it in atomically, so that readers on other threads never
//!   see a half built buffer.

// Attach sources.
pub mod raster_cache;
pub mod raster_impl;

// Re-export.
pub use raster_cache::*;
pub use raster_impl::*;
