// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Restore the terminal on exit paths that skip [`RawModeGuard`]'s `Drop`.
//!
//! | Exit path                         | Restored by                  |
//! | --------------------------------- | ---------------------------- |
//! | normal return, `?` error          | [`RawModeGuard`] drop        |
//! | panic (unwinding)                 | panic hook, then guard drop  |
//! | panic (`panic = "abort"`)         | panic hook                   |
//! | `SIGTERM`, `SIGHUP`, `SIGINT`, `SIGQUIT` | signal thread         |
//!
//! `SIGINT` and `SIGQUIT` only arrive from the keyboard while `ISIG` is still on, i.e.
//! with the [`EchoOff`] and [`CanonicalOff`] profiles. They can always be sent with
//! `kill`.
//!
//! [`RawModeGuard`]: super::RawModeGuard
//! [`EchoOff`]: super::RawModeProfile::EchoOff
//! [`CanonicalOff`]: super::RawModeProfile::CanonicalOff

use super::disable_raw_mode;
#[cfg(unix)]
use super::restore_terminal_and_exit;
use crate::{CommonResult, ok};
use std::sync::{Once,
                atomic::{AtomicBool, Ordering}};

/// Failed to install the termination signal handler.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ExitHookError {
    #[error("Failed to register termination signal handlers")]
    #[diagnostic(
        code(rawkey::exit_hooks::signal_registration),
        help("Signal handler creation failed - check system signal limits")
    )]
    SignalRegistration(#[source] std::io::Error),

    #[error("Failed to spawn the signal watcher thread")]
    #[diagnostic(code(rawkey::exit_hooks::thread_spawn))]
    ThreadSpawn(#[source] std::io::Error),
}

/// Signals that end the process and must restore the terminal first.
#[cfg(unix)]
pub const TERMINATION_SIGNALS: [i32; 4] = [
    signal_hook::consts::SIGTERM,
    signal_hook::consts::SIGHUP,
    signal_hook::consts::SIGINT,
    signal_hook::consts::SIGQUIT,
];

static PANIC_HOOK: Once = Once::new();
static SIGNAL_HANDLER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Exit status for a process ended by `signal`, the same as a shell reports.
#[must_use]
pub fn exit_code_for_signal(signal: i32) -> i32 { 128 + signal }

/// Install both the panic hook and the signal handler. Safe to call more than once.
///
/// # Errors
///
/// Returns [`ExitHookError`] if the signal handler can't be installed.
pub fn install_exit_hooks() -> CommonResult<()> {
    install_panic_hook();
    install_signal_handler()
}

/// Chain a panic hook that restores the terminal before the previous hook prints the
/// panic message, so the message is readable. Only the first call installs it.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            drop(disable_raw_mode());
            previous_hook(info);
        }));
        tracing::debug!(message = "panic hook installed");
    });
}

/// Spawn a thread that waits for any of [`TERMINATION_SIGNALS`], restores the terminal,
/// and exits the process with [`exit_code_for_signal`]. Only the first successful call
/// installs it.
///
/// # Errors
///
/// - [`ExitHookError::SignalRegistration`] if the signals can't be registered.
/// - [`ExitHookError::ThreadSpawn`] if the watcher thread can't be started.
#[cfg(unix)]
pub fn install_signal_handler() -> CommonResult<()> {
    use signal_hook::iterator::Signals;

    if SIGNAL_HANDLER_INSTALLED.swap(true, Ordering::SeqCst) {
        return ok!();
    }

    let result = Signals::new(TERMINATION_SIGNALS)
        .map_err(ExitHookError::SignalRegistration)
        .and_then(|mut signals| {
            std::thread::Builder::new()
                .name("rawkey-signals".into())
                .spawn(move || {
                    if let Some(signal) = signals.forever().next() {
                        tracing::warn!(
                            message = "termination signal received, restoring terminal",
                            signal
                        );
                        restore_terminal_and_exit(exit_code_for_signal(signal));
                    }
                })
                .map_err(ExitHookError::ThreadSpawn)
        });

    match result {
        Ok(_join_handle) => {
            tracing::debug!(message = "signal handler installed", signals = ?TERMINATION_SIGNALS);
            ok!()
        }
        Err(err) => {
            SIGNAL_HANDLER_INSTALLED.store(false, Ordering::SeqCst);
            Err(err.into())
        }
    }
}

/// No signals to watch on this target.
///
/// # Errors
///
/// Never fails.
#[cfg(not(unix))]
pub fn install_signal_handler() -> CommonResult<()> {
    SIGNAL_HANDLER_INSTALLED.store(true, Ordering::SeqCst);
    ok!()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2, 130 ; "sigint")]
    #[test_case(15, 143 ; "sigterm")]
    #[test_case(1, 129 ; "sighup")]
    fn test_exit_code_for_signal(signal: i32, expected: i32) {
        assert_eq!(exit_code_for_signal(signal), expected);
    }

    #[test]
    fn test_panic_hook_can_be_installed_twice() {
        install_panic_hook();
        install_panic_hook();
        let result = std::panic::catch_unwind(|| panic!("hook must not get in the way"));
        assert!(result.is_err());
    }
}
