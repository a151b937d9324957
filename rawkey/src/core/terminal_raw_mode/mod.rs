// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode: capture the original terminal configuration, switch to a raw
//! one, and guarantee the original comes back on every exit path.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C, Ctrl+Z, Ctrl+S, Ctrl+Q, etc.)
//! - Echoing is enabled (typed characters appear on screen)
//! - Output `\n` is turned into `\r\n`
//!
//! **Raw Mode**:
//! - No line buffering - bytes available immediately
//! - No special character processing - all bytes pass through
//! - No echo - typed characters don't automatically appear
//! - No output processing - the program writes `\r\n` itself
//!
//! ## The termios record
//!
//! The kernel keeps one attribute record per terminal, read with `tcgetattr()` and
//! written with `tcsetattr()`. It holds four flag sets and an array of control
//! characters:
//!
//! | Field     | Name                   | Flags touched here                          |
//! | --------- | ---------------------- | ------------------------------------------- |
//! | `c_lflag` | local ("misc") flags   | `ECHO`, `ICANON`, `ISIG`, `IEXTEN`          |
//! | `c_iflag` | input flags            | `IXON`, `ICRNL`, `BRKINT`, `INPCK`, `ISTRIP` |
//! | `c_oflag` | output flags           | `OPOST`                                     |
//! | `c_cflag` | control flags          | `CS8`                                       |
//! | `c_cc`    | control characters     | `VMIN`, `VTIME`                             |
//!
//! What each flag does when it is on:
//! - `ECHO`: print each typed character back (off while `sudo` asks for a password).
//! - `ICANON`: read input line by line. Off means the program gets every byte as it is
//!   typed, so pressing `q` quits immediately.
//! - `ISIG`: `Ctrl+C` sends `SIGINT`, `Ctrl+Z` sends `SIGTSTP`. Off means they arrive as
//!   bytes `3` and `26`.
//! - `IEXTEN`: `Ctrl+V` quotes the next character. Off means it arrives as byte `22`.
//! - `IXON`: `Ctrl+S` stops and `Ctrl+Q` resumes output. Off means bytes `19` and `17`.
//! - `ICRNL`: Enter (`\r`) is translated to `\n`. Off means Enter arrives as `13`.
//! - `OPOST`: output `\n` is translated to `\r\n`.
//! - `BRKINT`, `INPCK`, `ISTRIP`: break sends `SIGINT`, parity checking, strip the 8th
//!   bit. Usually already off on a terminal emulator; turned off for completeness.
//! - `CS8`: 8 bits per character.
//!
//! [`RawModeProfile`] selects how many of these get switched off.
//!
//! ## The `stty` Command
//!
//! `stty` is the command-line interface to the same settings:
//!
//! ```bash
//! stty -a          # All settings (input/output flags, control chars, etc.)
//! stty -g          # Machine-readable format (for save/restore)
//! stty sane        # Recover a terminal left in raw mode
//! ```
//!
//! If a terminal is ever left in raw mode, type `reset` and press Enter (nothing will be
//! echoed while you type).
//!
//! ## Saved original and restoration
//!
//! The first successful [`enable_raw_mode()`] stores the terminal's configuration in a
//! process-wide slot. That copy is never modified afterwards; every raw configuration
//! is derived from it and [`disable_raw_mode()`] writes it back. Both directions use
//! `TCSAFLUSH`: wait for pending output, discard unread input.
//!
//! ## Usage Example
//!
//! The recommended way to use raw mode is with the [`RawModeGuard`] and the
//! [`install_exit_hooks()`]:
//!
//! ```no_run
//! use rawkey::{RawModeGuard, RawModeProfile, install_exit_hooks};
//!
//! # fn main() -> miette::Result<()> {
//! install_exit_hooks()?;
//! {
//!     let _guard = RawModeGuard::new(RawModeProfile::Full)?;
//!     // Terminal is now in raw mode
//! } // Raw mode automatically disabled when guard is dropped
//! # Ok(())
//! # }
//! ```

// Private modules (hide internal structure).
mod exit_hooks;
mod raw_mode_core;
mod raw_mode_error;
mod raw_mode_profile;

#[cfg(unix)]
mod raw_mode_unix;
#[cfg(unix)]
mod termios_snapshot;

#[cfg(not(unix))]
mod raw_mode_unsupported;

// Re-export the public API (flat, ergonomic surface).
pub use exit_hooks::*;
pub use raw_mode_core::*;
pub use raw_mode_error::*;
pub use raw_mode_profile::*;
#[cfg(unix)]
pub use raw_mode_unix::{current_snapshot, saved_original_snapshot};
#[cfg(unix)]
pub use termios_snapshot::*;

// PTY based integration tests (Unix only).
#[cfg(all(unix, test))]
mod integration_tests;
