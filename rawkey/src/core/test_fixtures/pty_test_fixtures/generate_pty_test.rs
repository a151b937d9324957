// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Macro that generates PTY-based integration tests.
///
/// The same `#[test]` function runs twice, in two processes:
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │ Test Function (entry point)                                 │
/// │  - Macro detects role via environment variable              │
/// │  - Routes to controller or controlled function              │
/// │  - Skips in CI environments automatically                   │
/// └────────────┬────────────────────────────────┬───────────────┘
///              │                                │
///      Controller Path                  Controlled Path
///              │                                │
/// ┌────────────▼───────────┐    ┌───────────────▼───────────────┐
/// │ Macro: PTY Setup       │    │ Controlled Function           │
/// │ - Creates PTY pair     │    │ - Enables raw mode            │
/// │ - Spawns this binary   ├────▶ - Runs the checks             │
/// │   filtered to the test │    │ - Reports SUCCESS:/FAILED:    │
/// └────────────┬───────────┘    └────────────▲─┬────────────────┘
///              │                             │ │
/// ┌────────────▼──────────────────┐          │ │ PTY I/O
/// │ Controller Function           │          │ │
/// │ - Writes input (optional)     ├──────────┘ │
/// │ - Reads results               ◀────────────┘
/// │ - Waits for child exit        │
/// └───────────────────────────────┘
/// ```
///
/// # Notes
///
/// - The PTY is 24x80.
/// - The controlled function MUST exit the process (see [`succeed_controlled`] and
///   [`fail_controlled`]) so the test harness doesn't go on to run other tests.
/// - In a PTY, stdout and stderr are merged into one stream. Use content (the
///   `SUCCESS:` / `FAILED:` prefixes) to tell protocol lines from noise, like the test
///   harness' own `running 1 test` line.
///
/// # Parameters
///
/// - `test_fn`: The test function name (used as identifier, and as the test filter)
/// - `controller`: A function that accepts `(pty_pair, child)` parameters
/// - `controlled`: A function that runs in the controlled process (must not return)
///
/// [`succeed_controlled`]: super::succeed_controlled
/// [`fail_controlled`]: super::fail_controlled
#[macro_export]
macro_rules! generate_pty_test {
    (
        $(#[$meta:meta])*
        test_fn: $test_name:ident,
        controller: $controller_fn:expr,
        controlled: $controlled_fn:expr
    ) => {
        $(#[$meta])*
        #[test]
        fn $test_name() {
            use std::io::Write;
            use portable_pty::{CommandBuilder, NativePtySystem, PtySize, PtySystem};
            use $crate::PTY_CONTROLLED_ENV_VAR;

            let pty_controlled_env_var = std::env::var(PTY_CONTROLLED_ENV_VAR);

            // Skip in CI if running as controller.
            if pty_controlled_env_var.is_err() && is_ci::cached() {
                println!("⏭️  Skipped in CI (requires interactive terminal)");
                return;
            }

            // Check if we're running as the controlled process.
            if pty_controlled_env_var.is_ok() {
                println!("CONTROLLED_STARTING");
                std::io::stdout().flush().expect("Failed to flush stdout");

                // Run the controlled logic (never returns - exits process).
                $controlled_fn();
            }

            // Otherwise, run as controller - create PTY and spawn controlled.
            let pty_system = NativePtySystem::default();
            let pty_pair = pty_system
                .openpty(PtySize {
                    rows: 24,
                    cols: 80,
                    pixel_width: 0,
                    pixel_height: 0,
                })
                .expect("Failed to create PTY pair");

            let test_binary =
                std::env::current_exe().expect("Failed to get current executable");
            let mut cmd = CommandBuilder::new(&test_binary);
            cmd.env(PTY_CONTROLLED_ENV_VAR, "1");
            cmd.env("RUST_BACKTRACE", "1");
            cmd.args(["--test-threads", "1", "--nocapture", stringify!($test_name)]);

            let child = pty_pair
                .slave
                .spawn_command(cmd)
                .expect("Failed to spawn controlled process");

            // Call user's controller function with PTY resources.
            $controller_fn(pty_pair, child);
        }
    };
}
