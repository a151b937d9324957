// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::RawModeProfile;

/// Default byte that ends the echo loop.
pub const DEFAULT_QUIT_KEY: u8 = b'q';

/// What the echo session does: which raw mode to enter and which byte ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoConfig {
    pub profile: RawModeProfile,
    pub quit_key: u8,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            profile: RawModeProfile::default(),
            quit_key: DEFAULT_QUIT_KEY,
        }
    }
}

impl EchoConfig {
    /// Line ending to write after each echoed byte. With [`RawModeProfile::Full`] the
    /// terminal no longer adds `\r` to `\n`, so it has to be written explicitly or every
    /// line starts where the last one ended.
    #[must_use]
    pub fn line_ending(&self) -> &'static str {
        if self.profile.translates_output_newlines() {
            "\n"
        } else {
            "\r\n"
        }
    }
}
