// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Binaries that embed the picker and return `miette::Result<_>` from `main()` can call
//! [`setup_default_miette_global_report_handler`] to get graphical reports for
//! [`crate::ColorPickerError`]s (bad hex colors in a config file, etc.).
//!
//! The [`miette::ErrorHook`] is lazily evaluated, so the terminal width is only read at
//! the moment a report is actually displayed.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Register the global report handler. Calling this more than once is harmless, only the
/// first hook is kept.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = get_terminal_width_from_env();
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .rgb_colors(miette::RgbColors::Always)
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}

/// Most shells export `COLUMNS`. Fall back to [`DEFAULT_TERMINAL_WIDTH`] when it is
/// missing or garbage.
#[must_use]
pub fn get_terminal_width_from_env() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|it| it.trim().parse::<usize>().ok())
        .filter(|it| *it > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
