// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rawkey
//!
//! Put the controlling terminal into raw mode and echo the decimal code of every byte
//! typed on standard input, plus its printable form when it has one, until the quit key
//! (`q` by default) is pressed or input ends.
//!
//! ```text
//! $ rawkey
//! 97 ('a')
//! 3
//! 27
//! 91 ('[')
//! 65 ('A')
//! ```
//!
//! The terminal configuration captured before raw mode was entered is always put back:
//! when the session returns, when the process panics, and when it receives a
//! termination signal. See [`mod@core::terminal_raw_mode`] for how the raw
//! configuration is derived from the original one, and [`mod@core::key_echo`] for the
//! read loop.
//!
//! ## Raw mode profiles
//!
//! The amount of line discipline processing that gets disabled is selected by a
//! [`RawModeProfile`]. Each profile disables everything the previous one does:
//!
//! | Profile         | Disables                                                       |
//! | --------------- | -------------------------------------------------------------- |
//! | `echo-off`      | `ECHO`                                                         |
//! | `canonical-off` | + `ICANON`                                                     |
//! | `signals-off`   | + `ISIG`, `IXON`                                               |
//! | `full`          | + `IEXTEN`, `BRKINT`, `ICRNL`, `INPCK`, `ISTRIP`, `OPOST`; `CS8` |

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod app;
pub mod core;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use app::*;
pub use core::*;
