// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ModeFlags;
use rustix::termios::{SpecialCodeIndex, Termios};

/// Comparable view of a terminal configuration: the four flag sets plus the two special
/// codes raw mode changes.
///
/// Restoration is correct when the snapshot taken after raw mode is left equals the one
/// taken before it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermiosSnapshot {
    pub flags: ModeFlags,
    pub vmin: u8,
    pub vtime: u8,
}

impl From<&Termios> for TermiosSnapshot {
    fn from(termios: &Termios) -> Self {
        Self {
            flags: ModeFlags::from(termios),
            vmin: termios.special_codes[SpecialCodeIndex::VMIN],
            vtime: termios.special_codes[SpecialCodeIndex::VTIME],
        }
    }
}
