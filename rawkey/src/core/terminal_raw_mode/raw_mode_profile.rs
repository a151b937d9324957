// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Derivation of the raw terminal configuration from the original one.
//!
//! Everything in here is a pure function over termios flag sets, so it can be tested
//! without a terminal. The code that reads and writes the live terminal lives in
//! `raw_mode_unix`.

#[cfg(unix)]
use rustix::termios::{ControlModes, InputModes, LocalModes, OutputModes, Termios};
use strum_macros::{Display, EnumIter};

/// `VMIN` for raw mode: a `read()` returns as soon as 1 byte is available.
pub const VMIN_RAW_MODE: u8 = 1;

/// `VTIME` for raw mode: no inter-byte timeout, `read()` blocks until `VMIN` bytes.
pub const VTIME_RAW_MODE: u8 = 0;

/// How much of the line discipline gets switched off.
///
/// Each variant disables everything the previous one disables, plus more. `Full` is
/// what a screen editor needs and is the default.
///
/// | Variant        | Local modes off            | Input modes off                         | Output | Control  |
/// | -------------- | -------------------------- | --------------------------------------- | ------ | -------- |
/// | `EchoOff`      | `ECHO`                     |                                         |        |          |
/// | `CanonicalOff` | + `ICANON`                 |                                         |        |          |
/// | `SignalsOff`   | + `ISIG`                   | `IXON`                                  |        |          |
/// | `Full`         | + `IEXTEN`                 | + `BRKINT`, `ICRNL`, `INPCK`, `ISTRIP`  | `OPOST`| `CS8`    |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum RawModeProfile {
    /// Typed characters are no longer printed back by the terminal.
    EchoOff,
    /// Bytes are delivered as they are typed instead of line by line.
    CanonicalOff,
    /// `Ctrl+C`, `Ctrl+Z`, `Ctrl+\`, `Ctrl+S`, `Ctrl+Q` arrive as bytes.
    SignalsOff,
    /// No input translation, no output post processing, 8 bit clean.
    #[default]
    Full,
}

impl RawModeProfile {
    /// `true` when the terminal still turns `\n` into `\r\n` on output. Only [`Full`]
    /// switches `OPOST` off, after which writers must emit `\r\n` themselves.
    ///
    /// [`Full`]: Self::Full
    #[must_use]
    pub fn translates_output_newlines(self) -> bool { !matches!(self, Self::Full) }

    /// `true` when reads are no longer line buffered, which is when `VMIN` and `VTIME`
    /// start to matter.
    #[must_use]
    pub fn is_byte_at_a_time(self) -> bool { !matches!(self, Self::EchoOff) }

    /// Derive the raw flags from `original`. Bits this profile does not name are passed
    /// through unchanged.
    #[cfg(unix)]
    #[must_use]
    pub fn apply(self, original: ModeFlags) -> ModeFlags {
        let mut it = original;

        it.local.remove(LocalModes::ECHO);

        if matches!(self, Self::EchoOff) {
            return it;
        }
        it.local.remove(LocalModes::ICANON);

        if matches!(self, Self::CanonicalOff) {
            return it;
        }
        it.local.remove(LocalModes::ISIG);
        it.input.remove(InputModes::IXON);

        if matches!(self, Self::SignalsOff) {
            return it;
        }
        it.local.remove(LocalModes::IEXTEN);
        it.input.remove(
            InputModes::BRKINT | InputModes::ICRNL | InputModes::INPCK | InputModes::ISTRIP,
        );
        it.output.remove(OutputModes::OPOST);
        // CS8 is a value inside the CSIZE field, not a single bit.
        it.control.remove(ControlModes::CSIZE);
        it.control.insert(ControlModes::CS8);

        it
    }
}

/// The four flag sets of a termios record.
///
/// [`Termios`] is not `Copy` and can't be built outside of `tcgetattr()`, so the profile
/// logic works on this instead.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeFlags {
    pub input: InputModes,
    pub output: OutputModes,
    pub control: ControlModes,
    pub local: LocalModes,
}

#[cfg(unix)]
impl ModeFlags {
    /// Overwrite the flag sets of `termios` with `self`. Special codes are not touched.
    pub fn write_to(self, termios: &mut Termios) {
        termios.input_modes = self.input;
        termios.output_modes = self.output;
        termios.control_modes = self.control;
        termios.local_modes = self.local;
    }
}

#[cfg(unix)]
impl From<&Termios> for ModeFlags {
    fn from(termios: &Termios) -> Self {
        Self {
            input: termios.input_modes,
            output: termios.output_modes,
            control: termios.control_modes,
            local: termios.local_modes,
        }
    }
}
