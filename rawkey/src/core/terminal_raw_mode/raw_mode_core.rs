// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core raw mode functionality and RAII guard.
//!
//! This module provides:
//! - Platform-agnostic public API functions that dispatch to platform-specific
//!   implementations
//! - The `RawModeGuard` RAII wrapper for automatic resource cleanup

use super::RawModeProfile;
use crate::CommonResult;

// Import platform-specific implementations
#[cfg(unix)]
use super::raw_mode_unix as platform;
#[cfg(not(unix))]
use super::raw_mode_unsupported as platform;

/// Enable raw mode on the terminal, disabling as much of the line discipline as
/// `profile` asks for.
///
/// See [module documentation] for:
/// - Why raw mode is needed and how it differs from cooked mode
/// - What each [`RawModeProfile`] changes
/// - Complete usage examples
///
/// # Errors
///
/// Returns a [`RawModeError`] diagnostic if:
/// - There is no terminal (stdin redirected and no `/dev/tty`)
/// - Terminal attributes cannot be retrieved or set
/// - Platform is not supported
/// - Lock is poisoned (internal state corruption)
///
/// [`RawModeError`]: super::RawModeError
/// [module documentation]: mod@crate::core::terminal_raw_mode
pub fn enable_raw_mode(profile: RawModeProfile) -> CommonResult<()> {
    platform::enable_raw_mode(profile)?;
    Ok(())
}

/// Disable raw mode and restore original terminal settings.
///
/// Safe to call even if raw mode was never enabled (it will be a no-op), and safe to
/// call more than once. Returns whether the terminal was actually written to.
/// Prefer using [`RawModeGuard`] for automatic cleanup.
///
/// See [module documentation] for complete documentation and examples.
///
/// # Errors
///
/// Returns a [`RawModeError`] diagnostic if the terminal fd cannot be obtained or its
/// attributes cannot be set.
///
/// [`RawModeError`]: super::RawModeError
/// [module documentation]: mod@crate::core::terminal_raw_mode
pub fn disable_raw_mode() -> CommonResult<bool> { Ok(platform::disable_raw_mode()?) }

/// Restore the original terminal settings and exit the process with `exit_code`.
///
/// Unlike [`disable_raw_mode()`] followed by [`std::process::exit`], no other thread can
/// put the terminal back into raw mode in between. Used by the signal thread of the
/// [exit hooks].
///
/// [exit hooks]: super::install_exit_hooks
pub fn restore_terminal_and_exit(exit_code: i32) -> ! {
    platform::restore_and_exit(exit_code)
}

/// RAII guard that automatically disables raw mode when dropped.
///
/// Recommended way to use raw mode as it ensures terminal restoration when the scope
/// ends, including while unwinding from a panic. Paths that don't unwind (signals,
/// `panic = "abort"`) are covered by the [exit hooks].
///
/// [exit hooks]: super::install_exit_hooks
#[derive(Debug)]
pub struct RawModeGuard {
    profile: RawModeProfile,
}

impl RawModeGuard {
    /// Create a new guard and enable raw mode.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if raw mode cannot be enabled.
    /// See [`enable_raw_mode()`] for error conditions.
    pub fn new(profile: RawModeProfile) -> CommonResult<Self> {
        enable_raw_mode(profile)?;
        Ok(RawModeGuard { profile })
    }

    #[must_use]
    pub fn profile(&self) -> RawModeProfile { self.profile }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) { drop(disable_raw_mode()); }
}
