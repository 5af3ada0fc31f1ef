// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Customizes how a [`miette::Report`] is displayed when `main() -> miette::Result<_>`
//! returns an error.
//!
//! - The global default implementation of the [`ReportHandler`
//!   trait](https://docs.rs/miette/latest/miette/trait.ReportHandler.html) is
//!   `MietteHandler`, configured here with [`MietteHandlerOpts`].
//! - The hook is lazy, so the terminal width is only measured when an error is actually
//!   displayed.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/tmorse/issues/new";

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = usize::from(
                crossterm::terminal::size()
                    .map(|(columns, _rows)| columns)
                    .unwrap_or(80),
            );
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(format!("Report bugs at: {issues_url}"))
                .build(),
        )
    }))
    .ok();
}
