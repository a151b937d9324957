// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Targets without termios. Raw mode can't be entered, so there is never anything to
//! restore.

use super::{RawModeError, RawModeProfile};

/// # Errors
///
/// Always returns [`RawModeError::UnsupportedPlatform`].
pub fn enable_raw_mode(_profile: RawModeProfile) -> Result<(), RawModeError> {
    Err(RawModeError::UnsupportedPlatform)
}

/// # Errors
///
/// Never fails.
pub fn disable_raw_mode() -> Result<bool, RawModeError> { Ok(false) }

/// Nothing to restore, so this only exits.
pub fn restore_and_exit(exit_code: i32) -> ! { std::process::exit(exit_code) }
