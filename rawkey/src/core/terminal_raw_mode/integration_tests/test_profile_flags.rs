// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Each profile sets the correct termios flags on a real PTY, not just *something*.

use super::{assert_snapshot_eq, expect_success, snapshot_or_fail};
use crate::{RawModeProfile, VMIN_RAW_MODE, VTIME_RAW_MODE, disable_raw_mode,
            enable_raw_mode, fail_controlled, generate_pty_test, succeed_controlled};
use rustix::termios::{ControlModes, InputModes, LocalModes, OutputModes};
use strum::IntoEnumIterator;

generate_pty_test! {
    /// Checks, for every profile:
    /// - Local modes: ECHO always off; ICANON, ISIG, IEXTEN off as the profile says
    /// - Input modes: IXON off from `signals-off`; ICRNL etc. off for `full`
    /// - Output modes: OPOST off for `full`
    /// - Control modes: CS8 for `full`
    /// - Special codes: VMIN=1, VTIME=0 once input is no longer line buffered
    ///
    /// Run with: `cargo test -p rawkey --lib test_profile_flags -- --nocapture`
    test_fn: test_profile_flags,
    controller: expect_success,
    controlled: controlled_entry_point
}

fn controlled_entry_point() -> ! {
    let before = snapshot_or_fail("before");

    for profile in RawModeProfile::iter() {
        enable_raw_mode(profile)
            .unwrap_or_else(|e| fail_controlled(&format!("{profile}: enable failed: {e}")));
        let raw = snapshot_or_fail(&format!("{profile}"));
        let fail = |what: &str| -> ! { fail_controlled(&format!("{profile}: {what}")) };

        if raw.flags.local.contains(LocalModes::ECHO) {
            fail("ECHO not disabled");
        }

        let icanon_off = !matches!(profile, RawModeProfile::EchoOff);
        if icanon_off == raw.flags.local.contains(LocalModes::ICANON) {
            fail("ICANON in the wrong state");
        }

        let signals_off = matches!(profile, RawModeProfile::SignalsOff | RawModeProfile::Full);
        if signals_off == raw.flags.local.contains(LocalModes::ISIG) {
            fail("ISIG in the wrong state");
        }
        if signals_off && raw.flags.input.contains(InputModes::IXON) {
            fail("IXON not disabled");
        }

        if matches!(profile, RawModeProfile::Full) {
            let unwanted_input_flags = InputModes::BRKINT
                | InputModes::ICRNL
                | InputModes::INPCK
                | InputModes::ISTRIP
                | InputModes::IXON;
            if raw.flags.input.intersects(unwanted_input_flags) {
                fail("input processing modes not disabled");
            }
            if raw.flags.local.contains(LocalModes::IEXTEN) {
                fail("IEXTEN not disabled");
            }
            if raw.flags.output.contains(OutputModes::OPOST) {
                fail("OPOST not disabled");
            }
            if !raw.flags.control.contains(ControlModes::CS8) {
                fail("CS8 not set");
            }
        }

        if profile.is_byte_at_a_time()
            && (raw.vmin != VMIN_RAW_MODE || raw.vtime != VTIME_RAW_MODE)
        {
            fail(&format!("VMIN={} VTIME={}", raw.vmin, raw.vtime));
        }

        eprintln!("  ✓ {profile} flags verified");

        disable_raw_mode()
            .unwrap_or_else(|e| fail_controlled(&format!("{profile}: disable failed: {e}")));
        assert_snapshot_eq(snapshot_or_fail("after"), before, "not restored");
    }

    succeed_controlled("all termios flags verified");
}
