// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configure how [miette](https://docs.rs/miette/latest/miette/index.html) renders the
//! [`Report`](https://docs.rs/miette/latest/miette/struct.Report.html) returned from
//! `main() -> miette::Result<_>`.
//!
//! The hook is only evaluated when a report is actually displayed, which for `rawkey`
//! is always *after* the terminal has been restored to cooked mode. So the width lookup
//! below sees the user's real terminal.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Fallback column count when stderr is not a terminal.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Width of the terminal attached to stderr, or [`DEFAULT_REPORT_WIDTH`].
#[must_use]
pub fn get_report_width() -> usize {
    #[cfg(unix)]
    {
        let stderr = std::io::stderr();
        match rustix::termios::tcgetwinsize(&stderr) {
            Ok(winsize) if winsize.ws_col > 0 => usize::from(winsize.ws_col),
            _ => DEFAULT_REPORT_WIDTH,
        }
    }

    #[cfg(not(unix))]
    {
        DEFAULT_REPORT_WIDTH
    }
}

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = get_report_width();
        debug!("miette::set_hook -> terminal_width: {}", terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
