//! Timeout-guarded writer
//!
//! Issues an asynchronous transport write, then spins until the transport's
//! completion context raises [`TransferComplete`] or more than the timeout
//! has elapsed on the [`TickCounter`]. There is no retry; at the deadline
//! the write is abandoned and the caller moves on.
//!
//! Only the control loop may write. The spin is the one place the loop
//! waits, and it is bounded by the tick counter alone.

use portable_atomic::{AtomicBool, Ordering};

use regfifo_hal::TransportTx;

use crate::tick::TickCounter;

/// Flag raised by the transport when a write has been sent
///
/// Single producer (completion context), single consumer (the writer).
#[derive(Debug)]
pub struct TransferComplete {
    done: AtomicBool,
}

impl Default for TransferComplete {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferComplete {
    /// An idle link counts as complete
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(true),
        }
    }

    /// Writer only, immediately before starting a transfer
    pub fn clear(&self) {
        self.done.store(false, Ordering::Release);
    }

    /// Completion context only
    pub fn signal(&self) {
        self.done.store(true, Ordering::Release);
    }

    /// Check if the last transfer has completed
    pub fn is_complete(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

/// How a write ended
///
/// The dispatcher does not act on this beyond counting timeouts; a write
/// is fire-and-forget from the command's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteOutcome {
    /// Completion signalled before the deadline
    Completed,
    /// Deadline passed without a completion signal
    TimedOut,
    /// Transport refused to start the transfer
    NotStarted,
}

/// Writer that bounds every transfer by a tick deadline
pub struct TimeoutWriter<'a, T> {
    transport: T,
    complete: &'a TransferComplete,
    ticks: &'a TickCounter,
    timeout_ms: u32,
}

impl<'a, T: TransportTx> TimeoutWriter<'a, T> {
    /// Create a writer over `transport`
    ///
    /// `complete` must be the flag the transport's completion context
    /// signals.
    pub fn new(
        transport: T,
        complete: &'a TransferComplete,
        ticks: &'a TickCounter,
        timeout_ms: u32,
    ) -> Self {
        Self {
            transport,
            complete,
            ticks,
            timeout_ms,
        }
    }

    /// Write `data` and wait for completion or the deadline
    pub fn write(&mut self, data: &[u8]) -> WriteOutcome {
        let start = self.ticks.now();
        self.complete.clear();

        if self.transport.start_write(data).is_err() {
            return WriteOutcome::NotStarted;
        }

        loop {
            if self.complete.is_complete() {
                return WriteOutcome::Completed;
            }
            if self.ticks.expired(start, self.timeout_ms) {
                return WriteOutcome::TimedOut;
            }
            core::hint::spin_loop();
        }
    }

    /// Borrow the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::thread;
    use std::time::Duration;
    use std::vec::Vec;

    use super::*;

    /// Transport that completes immediately, like a loopback
    struct InstantTransport<'a> {
        complete: &'a TransferComplete,
        sent: Vec<Vec<u8>>,
    }

    impl TransportTx for InstantTransport<'_> {
        type Error = ();

        fn start_write(&mut self, data: &[u8]) -> Result<(), ()> {
            self.sent.push(data.to_vec());
            self.complete.signal();
            Ok(())
        }
    }

    /// Transport whose completion never fires
    struct StalledTransport;

    impl TransportTx for StalledTransport {
        type Error = ();

        fn start_write(&mut self, _data: &[u8]) -> Result<(), ()> {
            Ok(())
        }
    }

    /// Transport that refuses every write
    struct RefusingTransport;

    impl TransportTx for RefusingTransport {
        type Error = ();

        fn start_write(&mut self, _data: &[u8]) -> Result<(), ()> {
            Err(())
        }
    }

    #[test]
    fn test_completed_write() {
        let complete = TransferComplete::new();
        let ticks = TickCounter::new();
        let transport = InstantTransport {
            complete: &complete,
            sent: Vec::new(),
        };
        let mut writer = TimeoutWriter::new(transport, &complete, &ticks, 10);

        assert_eq!(writer.write(b"0x0\r\n"), WriteOutcome::Completed);
        assert_eq!(writer.transport().sent, [b"0x0\r\n".to_vec()]);
    }

    #[test]
    fn test_flag_cleared_before_write() {
        let complete = TransferComplete::new();
        assert!(complete.is_complete());

        let ticks = TickCounter::new();
        let mut writer = TimeoutWriter::new(RefusingTransport, &complete, &ticks, 10);
        assert_eq!(writer.write(b"x"), WriteOutcome::NotStarted);
        assert!(!complete.is_complete());
    }

    /// Stands in for the 1 ms timer interrupt: waits until the writer has
    /// started a transfer, then advances `ticks` exactly `count` times
    fn tick_after_write_starts(complete: &TransferComplete, ticks: &TickCounter, count: u32) {
        while complete.is_complete() {
            thread::yield_now();
        }
        for _ in 0..count {
            thread::sleep(Duration::from_micros(100));
            ticks.tick();
        }
    }

    #[test]
    fn test_times_out_when_completion_never_fires() {
        let complete = TransferComplete::new();
        let ticks = TickCounter::new();
        let timeout_ms = 10;

        let outcome = thread::scope(|s| {
            s.spawn(|| tick_after_write_starts(&complete, &ticks, timeout_ms + 1));

            let mut writer = TimeoutWriter::new(StalledTransport, &complete, &ticks, timeout_ms);
            writer.write(b"0x50\r\n")
        });

        // Returns on the first tick past the deadline, not before
        assert_eq!(outcome, WriteOutcome::TimedOut);
        assert_eq!(ticks.now(), timeout_ms + 1);
    }

    #[test]
    fn test_deadline_across_tick_wrap() {
        let complete = TransferComplete::new();
        let ticks = TickCounter::new();
        ticks.set(u32::MAX - 3);

        let outcome = thread::scope(|s| {
            s.spawn(|| tick_after_write_starts(&complete, &ticks, 9));

            let mut writer = TimeoutWriter::new(StalledTransport, &complete, &ticks, 8);
            writer.write(b"x")
        });

        assert_eq!(outcome, WriteOutcome::TimedOut);
        assert_eq!(ticks.now(), 5);
    }

    #[test]
    fn test_completion_from_other_context() {
        let complete = TransferComplete::new();
        let ticks = TickCounter::new();

        let outcome = thread::scope(|s| {
            s.spawn(|| {
                // Completion lands while the writer spins; ticks never move
                while complete.is_complete() {
                    thread::yield_now();
                }
                thread::sleep(Duration::from_millis(1));
                complete.signal();
            });

            let mut writer = TimeoutWriter::new(StalledTransport, &complete, &ticks, 10);
            writer.write(b"sts?")
        });

        assert_eq!(outcome, WriteOutcome::Completed);
    }
}
