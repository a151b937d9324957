// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A termination signal is turned into a restore and `exit(128 + signo)` instead of the
//! default action, which would leave the terminal raw.
//!
//! The controlled process keeps re-entering raw mode on its main thread while the
//! signal arrives, so the signal thread's restore has to win against a concurrent
//! [`enable_raw_mode()`]. Whatever the interleaving, the terminal left behind must
//! equal the one the process started with.
//!
//! [`enable_raw_mode()`]: crate::enable_raw_mode

use super::snapshot_or_fail;
use crate::{ControlledChild, ControlledLines, Deadline, PtyPair, RawModeProfile,
            TermiosSnapshot, enable_raw_mode, exit_code_for_signal, fail_controlled,
            generate_pty_test, install_exit_hooks};
use pretty_assertions::assert_eq;
use signal_hook::consts::SIGTERM;
use std::{io::Write as _, time::Duration};
use strum::IntoEnumIterator;

const BEFORE_PREFIX: &str = "BEFORE:";

generate_pty_test! {
    /// Run with: `cargo test -p rawkey --lib test_restore_on_signal -- --nocapture`
    test_fn: test_restore_on_signal,
    controller: controller_entry_point,
    controlled: controlled_entry_point
}

/// Terminal settings as seen from the controller side of the PTY. On Linux the
/// controller fd reports the settings of the controlled side.
#[cfg(target_os = "linux")]
fn controlled_terminal_snapshot(pty_pair: &PtyPair) -> TermiosSnapshot {
    use rustix::fd::BorrowedFd;

    let raw_fd = pty_pair
        .master
        .as_raw_fd()
        .expect("Controller PTY has no file descriptor");
    // SAFETY: `raw_fd` is owned by `pty_pair.master`, which outlives this borrow.
    let fd = unsafe { BorrowedFd::borrow_raw(raw_fd) };
    let termios = rustix::termios::tcgetattr(fd).expect("Failed to read PTY termios");
    TermiosSnapshot::from(&termios)
}

fn controller_entry_point(pty_pair: PtyPair, child: ControlledChild) {
    let lines = ControlledLines::spawn(&pty_pair);

    let before = lines.wait_for(BEFORE_PREFIX, Deadline::default());
    lines.wait_for("RAISING_SIGTERM", Deadline::default());

    #[cfg(target_os = "linux")]
    {
        let (status, after) =
            lines.finish_with(pty_pair, child, controlled_terminal_snapshot);
        assert_exit_code(&status);
        assert_eq!(format!("{BEFORE_PREFIX} {after:?}"), before);
        eprintln!("  ✓ terminal restored after SIGTERM");
    }

    #[cfg(not(target_os = "linux"))]
    {
        assert!(before.starts_with(BEFORE_PREFIX));
        let status = lines.finish(pty_pair, child);
        assert_exit_code(&status);
    }
}

fn assert_exit_code(status: &portable_pty::ExitStatus) {
    let expected = u32::try_from(exit_code_for_signal(SIGTERM)).unwrap();
    assert_eq!(
        status.exit_code(),
        expected,
        "signal thread did not exit the process: {status:?}"
    );
}

fn controlled_entry_point() -> ! {
    let before = snapshot_or_fail("before");
    println!("{BEFORE_PREFIX} {before:?}");

    install_exit_hooks()
        .unwrap_or_else(|e| fail_controlled(&format!("could not install hooks: {e}")));

    println!("RAISING_SIGTERM");
    std::io::stdout().flush().ok();

    std::thread::spawn(|| {
        std::thread::sleep(Duration::from_millis(50));
        signal_hook::low_level::raise(SIGTERM)
            .unwrap_or_else(|e| fail_controlled(&format!("raise failed: {e}")));
    });

    // Keep applying raw settings until the signal thread ends the process.
    let deadline = Deadline::new(Duration::from_secs(3));
    for profile in RawModeProfile::iter().cycle() {
        if deadline.remaining().is_zero() {
            break;
        }
        enable_raw_mode(profile)
            .unwrap_or_else(|e| fail_controlled(&format!("{profile}: enable failed: {e}")));
    }

    fail_controlled("still running after SIGTERM");
}
