// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read key bytes one at a time and echo each one's decimal code.
//!
//! [`echo_keys()`] is the loop itself and works on any [`std::io::Read`] and
//! [`std::io::Write`], so it is tested with in-memory buffers. [`run_echo_session()`]
//! wires it to stdin and stdout inside a [`RawModeGuard`].
//!
//! [`RawModeGuard`]: crate::RawModeGuard

// Attach sources.
pub mod echo_config;
pub mod echo_loop;
pub mod echo_session;
pub mod key_byte;

// Re-export.
pub use echo_config::*;
pub use echo_loop::*;
pub use echo_session::*;
pub use key_byte::*;
