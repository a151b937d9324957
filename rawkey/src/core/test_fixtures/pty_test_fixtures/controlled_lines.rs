// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ControlledChild, PtyPair};
use std::{io::{BufRead, BufReader},
          sync::mpsc::{self, Receiver, RecvTimeoutError},
          thread::JoinHandle,
          time::{Duration, Instant}};

/// Point in time by which a line from the controlled process has to arrive.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            expires_at: Instant::now() + timeout,
        }
    }

    /// Time left until expiry, zero once expired. Suitable for `recv_timeout()`.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

impl Default for Deadline {
    /// 5 seconds, enough for a controlled process to start and report back.
    fn default() -> Self { Self::new(Duration::from_secs(5)) }
}

/// Lines read from the controller side of a PTY by a background thread.
///
/// Reading on a thread means [`Deadline`]s are enforced even when the controlled
/// process stops writing, and the PTY buffer keeps being drained while the controller
/// waits for the child to exit. Without draining, a child whose `exit()` flushes more
/// output than the PTY buffer holds (about 1 KB on macOS) blocks forever.
#[derive(Debug)]
pub struct ControlledLines {
    receiver: Receiver<String>,
    reader_thread: JoinHandle<()>,
}

impl ControlledLines {
    /// Start reading. Each line is trimmed (raw mode output ends in `\r\n`).
    ///
    /// # Panics
    ///
    /// Panics if the controller reader can't be cloned.
    #[must_use]
    pub fn spawn(pty_pair: &PtyPair) -> Self {
        let reader = pty_pair
            .master
            .try_clone_reader()
            .expect("Failed to get reader");
        let (sender, receiver) = mpsc::channel();

        let reader_thread = std::thread::spawn(move || {
            let mut buf_reader = BufReader::new(reader);
            loop {
                let mut line = String::new();
                match buf_reader.read_line(&mut line) {
                    // EOF, or EIO on Linux once the controlled side is closed.
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        eprintln!("  ← Controlled output: {}", line.trim_end());
                        if sender.send(line.trim().to_string()).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            receiver,
            reader_thread,
        }
    }

    /// Return the first line for which `predicate` holds, skipping the others.
    ///
    /// # Panics
    ///
    /// Panics if the deadline expires, the controlled process exits first, or it
    /// reports a `FAILED:` line.
    pub fn next_matching(
        &self,
        deadline: Deadline,
        predicate: impl Fn(&str) -> bool,
    ) -> String {
        loop {
            match self.receiver.recv_timeout(deadline.remaining()) {
                Ok(line) => {
                    assert!(!line.contains("FAILED:"), "Controlled failed: {line}");
                    if predicate(&line) {
                        return line;
                    }
                }
                Err(RecvTimeoutError::Timeout) => panic!("Timed out waiting for line"),
                Err(RecvTimeoutError::Disconnected) => {
                    panic!("Controlled process closed the PTY before the line arrived")
                }
            }
        }
    }

    /// Skip lines until one contains `marker`, and return that line.
    ///
    /// # Panics
    ///
    /// See [`next_matching()`](Self::next_matching).
    pub fn wait_for(&self, marker: &str, deadline: Deadline) -> String {
        self.next_matching(deadline, |line| line.contains(marker))
    }

    /// Reap the child, close the controller's handles, and stop the reader thread.
    ///
    /// # Panics
    ///
    /// Panics if waiting for the child fails.
    pub fn finish(
        self,
        pty_pair: PtyPair,
        child: ControlledChild,
    ) -> portable_pty::ExitStatus {
        self.finish_with(pty_pair, child, |_| ()).0
    }

    /// Like [`finish()`](Self::finish), but runs `after_exit` once the child is gone
    /// and before the PTY is closed, so the terminal the child left behind can still be
    /// inspected.
    ///
    /// # Panics
    ///
    /// Panics if waiting for the child fails.
    pub fn finish_with<R>(
        self,
        pty_pair: PtyPair,
        mut child: ControlledChild,
        after_exit: impl FnOnce(&PtyPair) -> R,
    ) -> (portable_pty::ExitStatus, R) {
        // The reader thread keeps draining its own clone of the controller fd, so the
        // child can't block on a full PTY buffer while it exits.
        let status = child.wait().expect("Failed to wait for controlled process");
        eprintln!("✅ Controller: controlled process exited: {status:?}");

        let inspected = after_exit(&pty_pair);

        // Closing our side of the PTY ends the reader thread's `read_line()`.
        drop(pty_pair);
        drop(self.receiver);
        self.reader_thread.join().ok();

        (status, inspected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_remaining_shrinks_to_zero() {
        let deadline = Deadline::new(Duration::from_millis(20));
        assert!(deadline.remaining() <= Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_default_deadline_has_time_left() {
        let deadline = Deadline::default();
        assert!(deadline.remaining() > Duration::from_secs(4));
    }
}
