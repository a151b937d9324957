// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end: keys typed into the PTY are echoed as decimal codes, `Ctrl+C` arrives
//! as a byte instead of a signal, `q` ends the session, and the terminal is restored.

use super::{assert_snapshot_eq, snapshot_or_fail};
use crate::{ControlledChild, ControlledLines, Deadline, EchoConfig, PtyPair,
            StopReason, fail_controlled, generate_pty_test, run_echo_session,
            succeed_controlled};
use std::{io::Write, time::Duration};

const CONTROL_C: u8 = 0x03;

generate_pty_test! {
    /// Run with: `cargo test -p rawkey --lib test_echo_session -- --nocapture`
    test_fn: test_echo_session,
    controller: controller_entry_point,
    controlled: controlled_entry_point
}

fn controller_entry_point(pty_pair: PtyPair, child: ControlledChild) {
    let lines = ControlledLines::spawn(&pty_pair);
    let mut writer = pty_pair.master.take_writer().expect("Failed to get writer");

    lines.wait_for("SESSION_STARTING", Deadline::default());
    // Entering raw mode with TCSAFLUSH discards input that hasn't been read yet, so
    // give the controlled process time to get there before typing.
    std::thread::sleep(Duration::from_millis(300));

    let mut send = |bytes: &[u8]| {
        writer.write_all(bytes).expect("Failed to write");
        writer.flush().expect("Failed to flush");
    };

    send(b"a");
    let line = lines.next_matching(Deadline::default(), |it| it.starts_with("97"));
    assert_eq!(line, "97 ('a')");

    send(&[CONTROL_C]);
    let line = lines.next_matching(Deadline::default(), |it| it == "3");
    assert_eq!(line, "3");

    send(b"q");
    let success = lines.wait_for("SUCCESS:", Deadline::default());
    assert!(success.contains("bytes_echoed=2"), "{success}");

    drop(writer);
    let status = lines.finish(pty_pair, child);
    assert!(status.success(), "Controlled process failed: {status:?}");
}

fn controlled_entry_point() -> ! {
    let before = snapshot_or_fail("before");

    println!("SESSION_STARTING");
    std::io::stdout().flush().ok();

    let summary = run_echo_session(&EchoConfig::default())
        .unwrap_or_else(|e| fail_controlled(&format!("session failed: {e}")));

    if summary.stop_reason != StopReason::QuitKey {
        fail_controlled(&format!("stopped because of {}", summary.stop_reason));
    }

    assert_snapshot_eq(
        snapshot_or_fail("after session"),
        before,
        "not restored after session",
    );

    succeed_controlled(&format!("bytes_echoed={}", summary.bytes_echoed));
}
