// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{EchoConfig, KeyByte};
use std::io::{ErrorKind, Read, Write};

/// Why [`echo_keys()`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum StopReason {
    /// The configured quit byte was read. It is not echoed.
    QuitKey,
    /// `read()` returned 0 bytes.
    EndOfInput,
}

/// Result of a finished echo loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoSummary {
    pub stop_reason: StopReason,
    /// Bytes written back, not counting the quit byte.
    pub bytes_echoed: usize,
}

/// I/O failure inside the echo loop.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EchoError {
    #[error("failed to read a key byte from stdin")]
    #[diagnostic(code(rawkey::echo::read))]
    Read(#[source] std::io::Error),

    #[error("failed to write to stdout")]
    #[diagnostic(code(rawkey::echo::write))]
    Write(#[source] std::io::Error),
}

/// Read `reader` one byte at a time, and for every byte write its [`KeyByte`] form and
/// [`EchoConfig::line_ending()`] to `writer`, flushing after each one so it shows up
/// while the user is still typing.
///
/// Stops at the quit byte or at end of input. Reads interrupted by a signal are
/// retried.
///
/// # Errors
///
/// [`EchoError::Read`] or [`EchoError::Write`] for any other I/O error.
pub fn echo_keys(
    mut reader: impl Read,
    mut writer: impl Write,
    config: &EchoConfig,
) -> Result<EchoSummary, EchoError> {
    let line_ending = config.line_ending();
    let mut bytes_echoed = 0;
    let mut buf = [0_u8; 1];

    let stop_reason = loop {
        let key = match reader.read(&mut buf) {
            Ok(0) => break StopReason::EndOfInput,
            Ok(_) => KeyByte(buf[0]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(EchoError::Read(e)),
        };

        tracing::trace!(message = "key byte", code = key.0, control = key.is_control());

        if key.0 == config.quit_key {
            break StopReason::QuitKey;
        }

        write!(writer, "{key}{line_ending}")
            .and_then(|()| writer.flush())
            .map_err(EchoError::Write)?;
        bytes_echoed += 1;
    };

    Ok(EchoSummary {
        stop_reason,
        bytes_echoed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawModeProfile;
    use pretty_assertions::assert_eq;
    use std::io::{self, Cursor};

    fn run(input: &[u8], config: &EchoConfig) -> (EchoSummary, String) {
        let mut output = Vec::new();
        let summary = echo_keys(Cursor::new(input), &mut output, config).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_stops_at_quit_key_without_echoing_it() {
        let (summary, output) = run(b"ab\x03qzz", &EchoConfig::default());

        assert_eq!(summary.stop_reason, StopReason::QuitKey);
        assert_eq!(summary.bytes_echoed, 3);
        assert_eq!(output, "97 ('a')\r\n98 ('b')\r\n3\r\n");
    }

    #[test]
    fn test_stops_at_end_of_input() {
        let (summary, output) = run(b"\x1b[A", &EchoConfig::default());

        assert_eq!(summary.stop_reason, StopReason::EndOfInput);
        assert_eq!(summary.bytes_echoed, 3);
        assert_eq!(output, "27\r\n91 ('[')\r\n65 ('A')\r\n");
    }

    #[test]
    fn test_empty_input() {
        let (summary, output) = run(b"", &EchoConfig::default());

        assert_eq!(summary, EchoSummary {
            stop_reason: StopReason::EndOfInput,
            bytes_echoed: 0,
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_quit_key_first() {
        let (summary, output) = run(b"qabc", &EchoConfig::default());

        assert_eq!(summary.stop_reason, StopReason::QuitKey);
        assert_eq!(summary.bytes_echoed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_custom_quit_key_and_cooked_output() {
        let config = EchoConfig {
            profile: RawModeProfile::SignalsOff,
            quit_key: b'x',
        };
        let (summary, output) = run(b"q\rx", &config);

        assert_eq!(summary.stop_reason, StopReason::QuitKey);
        assert_eq!(output, "113 ('q')\n13\n");
    }

    #[test]
    fn test_non_ascii_bytes_are_unsigned() {
        // "é" in UTF-8.
        let (_, output) = run("é".as_bytes(), &EchoConfig::default());
        assert_eq!(output, "195\r\n169\r\n");
    }

    /// Returns `Interrupted` once, then delegates.
    struct InterruptOnce<R> {
        interrupted: bool,
        inner: R,
    }

    impl<R: Read> Read for InterruptOnce<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupted {
                self.inner.read(buf)
            } else {
                self.interrupted = true;
                Err(io::Error::from(ErrorKind::Interrupted))
            }
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let reader = InterruptOnce {
            interrupted: false,
            inner: Cursor::new(b"z".to_vec()),
        };
        let mut output = Vec::new();
        let summary = echo_keys(reader, &mut output, &EchoConfig::default()).unwrap();

        assert_eq!(summary.bytes_echoed, 1);
        assert_eq!(output, b"122 ('z')\r\n");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_read_error_is_reported() {
        let result = echo_keys(FailingReader, Vec::new(), &EchoConfig::default());
        assert!(matches!(result, Err(EchoError::Read(e)) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_write_error_is_reported() {
        let mut sink = [0_u8; 4];
        let writer = Cursor::new(&mut sink[..]);
        let result = echo_keys(Cursor::new(b"abc"), writer, &EchoConfig::default());
        assert!(matches!(result, Err(EchoError::Write(_))));
    }
}
