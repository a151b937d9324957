// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// ASCII `DEL`, the only control character above the `0..=31` range.
pub const ASCII_DEL: u8 = 127;

/// One byte read from the terminal.
///
/// Displays as its unsigned decimal code, followed by the character in parentheses when
/// it is printable ASCII:
///
/// ```
/// use rawkey::KeyByte;
///
/// assert_eq!(KeyByte(b'a').to_string(), "97 ('a')");
/// assert_eq!(KeyByte(3).to_string(), "3");
/// assert_eq!(KeyByte(0xE2).to_string(), "226");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyByte(pub u8);

impl KeyByte {
    /// `0..=31` and `127`, same as C's `iscntrl()` in the "C" locale.
    #[must_use]
    pub fn is_control(self) -> bool { self.0.is_ascii_control() }

    /// The character for `32..=126`. Control bytes have no glyph, and bytes above `127`
    /// are only fragments of a multi-byte UTF-8 sequence, so both return `None`.
    #[must_use]
    pub fn printable(self) -> Option<char> {
        let Self(byte) = self;
        (byte.is_ascii() && !self.is_control()).then_some(char::from(byte))
    }
}

impl From<u8> for KeyByte {
    fn from(byte: u8) -> Self { Self(byte) }
}

impl Display for KeyByte {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.printable() {
            Some(ch) => write!(f, "{} ('{ch}')", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
