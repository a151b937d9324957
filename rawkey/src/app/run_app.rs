// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CLIArg;
use crate::{CommonResult, EchoSummary, run_echo_session, try_initialize_logging_global};

/// Validate the arguments, start logging if asked to, and run the echo session on the
/// real terminal. The terminal is back in its original mode when this returns.
///
/// # Errors
///
/// - [`CLIArgError`] if the arguments don't make a valid [`EchoConfig`].
/// - A logging setup error if the log file can't be created.
/// - Any error from [`run_echo_session()`].
///
/// [`CLIArgError`]: super::CLIArgError
/// [`EchoConfig`]: crate::EchoConfig
pub fn run_app(cli_arg: CLIArg) -> CommonResult<EchoSummary> {
    let echo_config = cli_arg.echo_config()?;

    try_initialize_logging_global(cli_arg.tracing_config())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let result = run_echo_session(&echo_config);

    match &result {
        Ok(summary) => tracing::debug!(
            message = "Stop logging...",
            stop_reason = %summary.stop_reason,
            bytes_echoed = summary.bytes_echoed
        ),
        Err(report) => tracing::error!(
            message = "Could not run rawkey due to the following problem",
            error = ?report
        ),
    }

    result
}
