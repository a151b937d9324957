// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup. Logging is **disabled** by default; nothing is written anywhere
//! unless [`try_initialize_logging_global`] is called with a level other than
//! [`tracing_core::LevelFilter::OFF`].
//!
//! While the terminal is in raw mode, stdout belongs to the echo loop, so the binary
//! only ever logs to a file ([`WriterConfig::File`]).

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
