// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The terminal configuration after a [`RawModeGuard`] is dropped equals the one before
//! it was created, across several enable/disable cycles and profile changes.

use super::{assert_snapshot_eq, expect_success, snapshot_or_fail};
use crate::{RawModeGuard, RawModeProfile, TermiosSnapshot, disable_raw_mode,
            enable_raw_mode, fail_controlled, generate_pty_test,
            saved_original_snapshot, succeed_controlled};

generate_pty_test! {
    /// Run with: `cargo test -p rawkey --lib test_restore_on_drop -- --nocapture`
    test_fn: test_restore_on_drop,
    controller: expect_success,
    controlled: controlled_entry_point
}

fn controlled_entry_point() -> ! {
    let before = snapshot_or_fail("before");

    if saved_original_snapshot().is_some() {
        fail_controlled("original saved before raw mode was enabled");
    }

    // Guard drop restores.
    {
        let guard = RawModeGuard::new(RawModeProfile::Full)
            .unwrap_or_else(|e| fail_controlled(&format!("enable failed: {e}")));

        let during = snapshot_or_fail("during");
        if during.flags != guard.profile().apply(before.flags) {
            fail_controlled("raw flags don't match the profile");
        }
        if during == before {
            fail_controlled("raw mode didn't change anything");
        }
    }
    assert_snapshot_eq(snapshot_or_fail("after drop"), before, "not restored on drop");

    // Switching profiles derives from the saved original, not from the live raw state.
    enable_raw_mode(RawModeProfile::Full)
        .unwrap_or_else(|e| fail_controlled(&format!("enable full failed: {e}")));
    enable_raw_mode(RawModeProfile::EchoOff)
        .unwrap_or_else(|e| fail_controlled(&format!("enable echo-off failed: {e}")));
    let echo_off = snapshot_or_fail("echo-off");
    if echo_off.flags != RawModeProfile::EchoOff.apply(before.flags) {
        fail_controlled("echo-off was applied on top of full");
    }

    // Restoring twice is the same as restoring once.
    for _ in 0..2 {
        match disable_raw_mode() {
            Ok(true) => {}
            Ok(false) => fail_controlled("nothing restored"),
            Err(e) => fail_controlled(&format!("disable failed: {e}")),
        }
    }
    assert_snapshot_eq(snapshot_or_fail("after disable"), before, "not restored");

    // The saved original was never modified.
    let saved: Option<TermiosSnapshot> = saved_original_snapshot();
    if saved != Some(before) {
        fail_controlled("saved original changed");
    }

    succeed_controlled("terminal restored after every cycle");
}
