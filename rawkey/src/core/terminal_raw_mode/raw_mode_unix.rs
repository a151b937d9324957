// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use super::{ModeFlags, RawModeError, RawModeProfile, TermiosSnapshot, VMIN_RAW_MODE,
            VTIME_RAW_MODE};
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, SpecialCodeIndex, Termios}};
use std::{fs::File,
          io,
          sync::{LazyLock, Mutex, PoisonError}};

/// Stores the original terminal settings to restore later. Written once, by the first
/// successful [`enable_raw_mode()`], and never modified after that.
static ORIGINAL_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
    LazyLock::new(|| Mutex::new(None));

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// This enum allows us to handle both cases where stdin is a tty (normal terminal usage)
/// and where stdin is redirected (e.g., piped input), requiring us to use `/dev/tty`.
enum TerminalFd {
    /// Using standard input (when it's a terminal)
    Stdin(io::Stdin),
    /// Using `/dev/tty` (when stdin is redirected)
    DevTty(File),
}

impl TerminalFd {
    fn kind(&self) -> &'static str {
        match self {
            TerminalFd::Stdin(_) => "stdin",
            TerminalFd::DevTty(_) => "/dev/tty",
        }
    }
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Gets a file descriptor for the controlling terminal.
///
/// Checks if stdin is a tty and uses it if so; otherwise opens `/dev/tty`. This handles
/// cases where stdin is redirected.
///
/// # Errors
///
/// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Enable raw mode on the terminal (Unix/Linux/macOS implementation).
///
/// 1. Get the controlling terminal (stdin if it's a tty, otherwise `/dev/tty`).
/// 2. Save the original terminal settings, unless an earlier call already did.
/// 3. Derive the raw settings from the *saved* original using `profile`, so calling this
///    again with another profile never stacks on top of an already raw terminal.
/// 4. Set `VMIN=1`, `VTIME=0` when input is no longer line buffered.
/// 5. Apply with `TCSAFLUSH`: pending output is drained and unread input is discarded.
///
/// # Errors
///
/// - [`RawModeError::NoTerminal`] if there is no terminal to configure.
/// - [`RawModeError::GetAttributes`] / [`RawModeError::SetAttributes`] if the termios
///   calls fail.
/// - [`RawModeError::LockPoisoned`] if the saved settings lock is poisoned.
pub fn enable_raw_mode(profile: RawModeProfile) -> Result<(), RawModeError> {
    let fd = get_terminal_fd().map_err(RawModeError::NoTerminal)?;

    let live = termios::tcgetattr(&fd)
        .map_err(|e| RawModeError::GetAttributes(e.into()))?;

    // The lock stays held until the raw settings are applied. The signal thread takes
    // it to restore and exit, so a restore can never be followed by a raw apply.
    let mut original = ORIGINAL_TERMIOS
        .lock()
        .map_err(|_| RawModeError::LockPoisoned)?;

    // rustix's Termios doesn't implement Copy, so we need to clone.
    let mut raw = original.get_or_insert_with(|| live.clone()).clone();

    profile.apply(ModeFlags::from(&raw)).write_to(&mut raw);

    if profile.is_byte_at_a_time() {
        raw.special_codes[SpecialCodeIndex::VMIN] = VMIN_RAW_MODE;
        raw.special_codes[SpecialCodeIndex::VTIME] = VTIME_RAW_MODE;
    }

    termios::tcsetattr(&fd, OptionalActions::Flush, &raw)
        .map_err(|e| RawModeError::SetAttributes(e.into()))?;

    drop(original);

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "raw mode enabled",
        profile = %profile,
        terminal = fd.kind(),
        raw = ?TermiosSnapshot::from(&raw)
    );

    Ok(())
}

/// Disable raw mode and restore original terminal settings (Unix/Linux/macOS
/// implementation).
///
/// Restores the terminal settings saved by [`enable_raw_mode()`] with `TCSAFLUSH`. The
/// saved copy is kept, so this can run any number of times. Returns `false` without
/// touching the terminal if raw mode was never enabled.
///
/// A poisoned lock does not stop restoration: this runs from the panic hook, and the
/// saved value itself is never modified while the lock is held.
///
/// # Errors
///
/// - [`RawModeError::NoTerminal`] if the terminal fd cannot be obtained.
/// - [`RawModeError::SetAttributes`] if `tcsetattr()` fails.
pub fn disable_raw_mode() -> Result<bool, RawModeError> {
    let original = ORIGINAL_TERMIOS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    restore(original.as_ref())
}

/// Restore the saved original and exit the process with `exit_code`, without letting
/// go of the saved settings lock. Any [`enable_raw_mode()`] running on another thread
/// blocks until the process is gone, so the terminal is left in its original state.
pub fn restore_and_exit(exit_code: i32) -> ! {
    let original = ORIGINAL_TERMIOS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Err(err) = restore(original.as_ref()) {
        tracing::error!(message = "could not restore terminal before exit", error = ?err);
    }

    std::process::exit(exit_code)
}

/// Write `original` back to the terminal. `Ok(false)` if nothing was ever saved.
fn restore(original: Option<&Termios>) -> Result<bool, RawModeError> {
    let Some(termios) = original else {
        return Ok(false);
    };

    let fd = get_terminal_fd().map_err(RawModeError::NoTerminal)?;

    termios::tcsetattr(&fd, OptionalActions::Flush, termios)
        .map_err(|e| RawModeError::SetAttributes(e.into()))?;

    tracing::debug!(message = "terminal restored", terminal = fd.kind());

    Ok(true)
}

/// Read-only view of the saved original, `None` until raw mode is first enabled.
pub fn saved_original_snapshot() -> Option<TermiosSnapshot> {
    ORIGINAL_TERMIOS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(TermiosSnapshot::from)
}

/// Snapshot of the live terminal configuration.
///
/// # Errors
///
/// - [`RawModeError::NoTerminal`] if there is no terminal.
/// - [`RawModeError::GetAttributes`] if `tcgetattr()` fails.
pub fn current_snapshot() -> Result<TermiosSnapshot, RawModeError> {
    let fd = get_terminal_fd().map_err(RawModeError::NoTerminal)?;
    let live = termios::tcgetattr(&fd)
        .map_err(|e| RawModeError::GetAttributes(e.into()))?;
    Ok(TermiosSnapshot::from(&live))
}
