// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{EchoConfig, EchoSummary, echo_keys};
use crate::{CommonResult, RawModeError, RawModeGuard, RawModeProfile,
            install_exit_hooks};

/// Run the echo loop on the real terminal.
///
/// 1. Install the [exit hooks] so a panic or termination signal restores the terminal.
/// 2. Enter raw mode with `config.profile`, held by a [`RawModeGuard`]. When there is
///    no terminal at all (stdin redirected and no `/dev/tty`, e.g. under cron) the loop
///    still runs on stdin as it is.
/// 3. Run [`echo_keys()`] on locked stdin and stdout.
/// 4. Restore the terminal (the guard is dropped) before returning, on success and on
///    error alike.
///
/// # Errors
///
/// - A [`RawModeError`] other than [`RawModeError::NoTerminal`] if raw mode can't be
///   entered.
/// - An [`ExitHookError`] if the signal handler can't be installed.
/// - An [`EchoError`] if reading stdin or writing stdout fails.
///
/// [exit hooks]: crate::install_exit_hooks
/// [`ExitHookError`]: crate::ExitHookError
/// [`EchoError`]: super::EchoError
pub fn run_echo_session(config: &EchoConfig) -> CommonResult<EchoSummary> {
    install_exit_hooks()?;

    let summary = {
        let _maybe_guard = try_enter_raw_mode(config.profile)?;
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        echo_keys(stdin, stdout, config)?
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "echo session finished",
        stop_reason = %summary.stop_reason,
        bytes_echoed = summary.bytes_echoed
    );

    Ok(summary)
}

/// `None` when there is no terminal to put in raw mode.
fn try_enter_raw_mode(profile: RawModeProfile) -> CommonResult<Option<RawModeGuard>> {
    match RawModeGuard::new(profile) {
        Ok(guard) => Ok(Some(guard)),
        Err(report) if is_no_terminal(&report) => {
            tracing::warn!(
                message = "no terminal, echoing stdin without raw mode",
                error = ?report
            );
            Ok(None)
        }
        Err(report) => Err(report),
    }
}

fn is_no_terminal(report: &miette::Report) -> bool {
    matches!(
        report.downcast_ref::<RawModeError>(),
        Some(RawModeError::NoTerminal(_))
    )
}
