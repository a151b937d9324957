// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The panic hook restores the terminal even when no guard gets dropped.

use super::{assert_snapshot_eq, expect_success, snapshot_or_fail};
use crate::{RawModeGuard, RawModeProfile, fail_controlled, generate_pty_test,
            install_panic_hook, succeed_controlled};

generate_pty_test! {
    /// Run with: `cargo test -p rawkey --lib test_restore_on_panic -- --nocapture`
    test_fn: test_restore_on_panic,
    controller: expect_success,
    controlled: controlled_entry_point
}

fn controlled_entry_point() -> ! {
    let before = snapshot_or_fail("before");

    install_panic_hook();

    let result = std::panic::catch_unwind(|| {
        let guard = RawModeGuard::new(RawModeProfile::Full)
            .unwrap_or_else(|e| fail_controlled(&format!("enable failed: {e}")));
        // Leak the guard so only the panic hook can restore.
        std::mem::forget(guard);
        panic!("simulated crash while in raw mode");
    });

    if result.is_ok() {
        fail_controlled("closure did not panic");
    }

    assert_snapshot_eq(
        snapshot_or_fail("after panic"),
        before,
        "not restored by panic hook",
    );

    succeed_controlled("terminal restored by panic hook");
}
