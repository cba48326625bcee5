// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure functions that map between pixel positions and HSV components, one module per
//! picker shape. Each shape has:
//! - an inverse mapping, `*_from_point(point, bounds)`, to interpret pointer input.
//! - a forward mapping, `point_from_*(component, bounds)`, to place the selection
//!   indicator.
//!
//! Inverse mappings clamp the pointer into the bounds first, so a drag that wanders off
//! the component still yields a deterministic, in range result. The disc is the
//! exception: a pointer outside its circle maps to [`None`] and callers keep the color
//! they already had.
//!
//! The ring and the disc use different angle conventions. Each convention is internally
//! consistent (forward and inverse agree), and they must not be unified.

// Attach sources.
pub mod disc_area;
pub mod hue_bar;
pub mod hue_ring;
pub mod saturation_value_box;
