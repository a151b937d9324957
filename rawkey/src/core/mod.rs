// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core: terminal raw mode lifecycle, exit hooks, the key echo loop, and logging.

// Attach sources.
pub mod common;
pub mod key_echo;
pub mod log;
pub mod terminal_raw_mode;
#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use key_echo::*;
pub use log::*;
pub use terminal_raw_mode::*;
#[cfg(test)]
pub use test_fixtures::*;
