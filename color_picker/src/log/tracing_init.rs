// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig, try_create_log_file_appender};
use crate::CommonResult;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Vec of type erased layers for the [`tracing_subscriber::Registry`].
pub type VecRegistryLayers = Vec<Box<DynLayer<tracing_subscriber::Registry>>>;

/// Global default subscriber, which once set, can't be unset or changed. This is meant
/// for apps.
///
/// Returns `Ok(())` without doing anything if the level filter is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if:
/// - The log file can't be created.
/// - A global subscriber has already been installed, eg: by a previous call.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> CommonResult<()> {
    let config: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    let layers = try_create_layers(config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, which lasts until the returned guard is dropped. This is meant
/// for tests.
///
/// Returns `Ok(None)` if the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> CommonResult<Option<dispatcher::DefaultGuard>> {
    let config: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    let layers = try_create_layers(config)?;
    Ok(Some(tracing_subscriber::registry().with(layers).set_default()))
}

/// Returns the layers. This does not initialize the tracing system.
///
/// The first layer is always the level filter, followed by the display layer and then
/// the file layer (if the [`WriterConfig`] asks for them).
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> CommonResult<VecRegistryLayers> {
    let level_filter = tracing_config.get_level_filter();
    let mut return_it: VecRegistryLayers = vec![Box::new(level_filter)];

    if let Some(layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// This never fails today, the signature matches [`try_create_file_layer`] so the two
/// compose the same way.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// This erases the concrete type of the writer, and returns a boxed layer. ANSI escape
/// sequences are turned off for the file.
///
/// # Errors
///
/// Returns [`crate::ColorPickerError::LogFileCouldNotBeCreated`] if the log file can't
/// be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, log_file_path)
        | WriterConfig::File(log_file_path) => {
            let file = try_create_log_file_appender(&log_file_path)?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
