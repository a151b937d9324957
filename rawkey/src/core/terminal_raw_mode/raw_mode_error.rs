// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Why raw mode could not be entered or left.
///
/// | Variant                 | Meaning                                                 |
/// | ----------------------- | ------------------------------------------------------- |
/// | [`NoTerminal`]          | stdin is not a tty and `/dev/tty` could not be opened   |
/// | [`GetAttributes`]       | `tcgetattr()` failed                                    |
/// | [`SetAttributes`]       | `tcsetattr()` failed                                    |
/// | [`LockPoisoned`]        | a thread panicked while holding the saved settings lock |
/// | [`UnsupportedPlatform`] | no termios on this target                               |
///
/// [`NoTerminal`]: Self::NoTerminal
/// [`GetAttributes`]: Self::GetAttributes
/// [`SetAttributes`]: Self::SetAttributes
/// [`LockPoisoned`]: Self::LockPoisoned
/// [`UnsupportedPlatform`]: Self::UnsupportedPlatform
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RawModeError {
    #[error("failed to get terminal file descriptor")]
    #[diagnostic(
        code(rawkey::raw_mode::no_terminal),
        help(
            "rawkey needs an interactive terminal. Run it directly in a terminal \
             emulator, not with its input and output both redirected."
        )
    )]
    NoTerminal(#[source] std::io::Error),

    #[error("failed to retrieve terminal attributes")]
    #[diagnostic(code(rawkey::raw_mode::get_attributes))]
    GetAttributes(#[source] std::io::Error),

    #[error("failed to set terminal attributes")]
    #[diagnostic(
        code(rawkey::raw_mode::set_attributes),
        help("If the terminal is left in a bad state, type `reset` and press Enter.")
    )]
    SetAttributes(#[source] std::io::Error),

    #[error("terminal settings lock poisoned")]
    #[diagnostic(code(rawkey::raw_mode::lock_poisoned))]
    LockPoisoned,

    #[error("raw mode is not supported on this platform")]
    #[diagnostic(code(rawkey::raw_mode::unsupported_platform))]
    UnsupportedPlatform,
}
