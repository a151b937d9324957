// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod controlled_lines;
pub mod generate_pty_test;

// Re-export.
pub use controlled_lines::*;

/// The child process spawned on the controlled side of the PTY.
pub type ControlledChild = Box<dyn portable_pty::Child + Send + Sync>;

/// Controller/controlled PTY pair.
pub type PtyPair = portable_pty::PtyPair;

/// Environment variable that marks a test binary as the controlled process.
pub const PTY_CONTROLLED_ENV_VAR: &str = "RAWKEY_PTY_TEST_CONTROLLED";

/// Report a failed check from the controlled process and exit. The controller turns
/// the `FAILED:` line into a panic.
pub fn fail_controlled(reason: &str) -> ! {
    use std::io::Write as _;
    println!("FAILED: {reason}");
    std::io::stdout().flush().ok();
    std::process::exit(1);
}

/// Report success from the controlled process and exit.
pub fn succeed_controlled(message: &str) -> ! {
    use std::io::Write as _;
    println!("SUCCESS: {message}");
    std::io::stdout().flush().ok();
    std::process::exit(0);
}
