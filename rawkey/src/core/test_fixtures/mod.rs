// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Helpers for the PTY based integration tests.

// Attach sources.
#[cfg(unix)]
pub mod pty_test_fixtures;

// Re-export.
#[cfg(unix)]
pub use pty_test_fixtures::*;
