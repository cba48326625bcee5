// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

/// Log file used when a [`TracingConfig`] is created from just a level.
pub const DEFAULT_LOG_FILE_NAME: &str = "color_picker_log.txt";

/// Configure where the logs go, and which level is let through.
///
/// [`try_initialize_logging_global`](crate::try_initialize_logging_global) and
/// [`try_initialize_logging_thread_local`](crate::try_initialize_logging_thread_local)
/// take any `impl Into<TracingConfig>`, so any of the following work:
///
/// ```
/// use r3bl_color_picker::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let from_level: TracingConfig = tracing::Level::DEBUG.into();
/// let from_display: TracingConfig = DisplayPreference::Stderr.into();
/// let from_file: TracingConfig = WriterConfig::File("picker.log".to_string()).into();
///
/// let composed = from_display + from_file;
/// assert_eq!(
///     composed.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "picker.log".to_string())
/// );
/// # let _ = from_level;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WriterConfig {
    #[default]
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    #[default]
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

mod tracing_config_conversions {
    use super::{Add, DEFAULT_LOG_FILE_NAME, DisplayPreference, LevelFilter, TracingConfig,
                WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two configs. The more verbose level wins, and the writers are merged with
    /// the rules of `WriterConfig + WriterConfig`.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two writer configs. The `rhs` clobbers the `self` wherever both have a
    /// value, ie: `rhs` has higher specificity.
    /// - `Display(a) + File(f) = DisplayAndFile(a, f)`.
    /// - `Display(a) + Display(b) = Display(b)`.
    /// - `None + x = x` and `x + None = x`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, it) | (it, None) => it,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision, rhs wins.
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp, f)) => {
                    DisplayAndFile(dp, f)
                }
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => {
                    DisplayAndFile(dp_rhs, f_lhs)
                }
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => {
                    DisplayAndFile(dp_lhs, f_rhs)
                }
            }
        }
    }
}
