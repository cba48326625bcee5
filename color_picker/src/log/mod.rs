// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional [`tracing`] setup for apps that embed the picker. The library itself only
//! emits `tracing::debug!` events (raster builds, cache swaps, config loads, color
//! changes), and they go nowhere until a subscriber is installed.
//!
//! Logging is **DISABLED** by **default**. Call [`try_initialize_logging_global`] (apps)
//! or [`try_initialize_logging_thread_local`] (tests) to turn it on.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
