// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! PTY-based integration tests for raw mode.
//!
//! Each test runs its checks in a controlled process attached to a fresh PTY, so the
//! terminal being switched to raw mode is never the developer's own.
//!
//! Run with: `cargo test -p rawkey --lib integration_tests -- --nocapture`

mod test_echo_session;
mod test_profile_flags;
mod test_restore_on_drop;
mod test_restore_on_panic;
mod test_restore_on_signal;

use crate::{ControlledChild, ControlledLines, Deadline, PtyPair, TermiosSnapshot,
            current_snapshot, fail_controlled};

/// Controller for tests whose controlled process does all the checking: wait for
/// `SUCCESS:` and a clean exit.
fn expect_success(pty_pair: PtyPair, child: ControlledChild) {
    let lines = ControlledLines::spawn(&pty_pair);

    lines.wait_for("CONTROLLED_STARTING", Deadline::default());
    let success = lines.wait_for("SUCCESS:", Deadline::default());
    eprintln!("  ✓ {success}");

    let status = lines.finish(pty_pair, child);
    assert!(status.success(), "Controlled process failed: {status:?}");
}

/// Live terminal snapshot, or report `FAILED:` and exit.
fn snapshot_or_fail(when: &str) -> TermiosSnapshot {
    current_snapshot()
        .unwrap_or_else(|e| fail_controlled(&format!("could not read termios {when}: {e}")))
}

/// Report `FAILED:` and exit unless `actual == expected`.
fn assert_snapshot_eq(actual: TermiosSnapshot, expected: TermiosSnapshot, what: &str) {
    if actual != expected {
        eprintln!("  expected: {expected:#?}");
        eprintln!("  actual:   {actual:#?}");
        fail_controlled(what);
    }
}
