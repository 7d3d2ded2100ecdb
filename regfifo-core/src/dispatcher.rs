//! Command dispatcher
//!
//! Runs in the control loop. Each call to [`Dispatcher::poll`] pops one
//! record, classifies it, executes it against the register file and writes
//! the response one line at a time through the [`TimeoutWriter`].
//!
//! Failure policy:
//! - unknown command: counted, no response
//! - unknown register: `0xffff` response
//! - write timeout: counted, the next line is still attempted
//!
//! Nothing here fails the loop.

use regfifo_hal::TransportTx;
use regfifo_protocol::response::{self, ResponseLine};
use regfifo_protocol::{Command, Identity, ResponseError, INVALID_VALUE};

use crate::queue::{record_content, SharedRecordQueue, SENTINEL};
use crate::registers::{RegisterFile, RegisterId};
use crate::stats::LinkStats;
use crate::tick::TickCounter;
use crate::writer::{TimeoutWriter, WriteOutcome};

/// Result of one dispatcher iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatched {
    /// A command ran and its response lines were written
    Executed {
        command: Command,
        /// Lines handed to the transport
        lines: u8,
        /// Of those, lines abandoned at the deadline
        timeouts: u8,
        /// Lines that could not be formatted or started
        dropped: u8,
    },
    /// The record matched no command
    Ignored,
}

/// Per-command write tally
#[derive(Default)]
struct Tally {
    lines: u8,
    timeouts: u8,
    dropped: u8,
}

/// Executes queued command records
pub struct Dispatcher<'a, T> {
    writer: TimeoutWriter<'a, T>,
    registers: RegisterFile,
    identity: Identity,
    ticks: &'a TickCounter,
    stats: &'a LinkStats,
}

impl<'a, T: TransportTx> Dispatcher<'a, T> {
    /// Create a dispatcher with a zeroed register file
    pub fn new(
        writer: TimeoutWriter<'a, T>,
        identity: Identity,
        ticks: &'a TickCounter,
        stats: &'a LinkStats,
    ) -> Self {
        Self {
            writer,
            registers: RegisterFile::new(),
            identity,
            ticks,
            stats,
        }
    }

    /// Pop and execute one record
    ///
    /// Returns `None` when nothing could be popped, which makes the
    /// iteration a no-op.
    pub fn poll<const N: usize, const C: usize>(
        &mut self,
        queue: &SharedRecordQueue<N, C>,
    ) -> Option<Dispatched> {
        let mut record = [SENTINEL; C];
        queue.pop(&mut record).ok()?;
        Some(self.execute(record_content(&record)))
    }

    /// Execute one command line
    pub fn execute(&mut self, line: &[u8]) -> Dispatched {
        let Some(command) = Command::parse(line) else {
            self.stats.record_unknown_command();
            return Dispatched::Ignored;
        };

        let mut tally = Tally::default();
        match command {
            Command::ReadRegister { id } => {
                let value = self.registers.get(id).unwrap_or(INVALID_VALUE);
                self.emit(&mut tally, response::hex_value(value));
            }
            Command::WriteRegister { id, value } => {
                let line = if self.registers.set(id, value) {
                    response::hex_value(value)
                } else {
                    response::invalid_value()
                };
                self.emit(&mut tally, line);
            }
            Command::Identify => {
                let line = response::identity(&self.identity);
                self.emit(&mut tally, line);
            }
            Command::Status => self.status(&mut tally),
        }

        Dispatched::Executed {
            command,
            lines: tally.lines,
            timeouts: tally.timeouts,
            dropped: tally.dropped,
        }
    }

    /// Multi-line status dump, one write per line
    fn status(&mut self, tally: &mut Tally) {
        self.emit(tally, response::status_header());
        for id in RegisterId::ALL {
            let line = response::status_register(id.raw(), self.registers.read(id));
            self.emit(tally, line);
        }
        self.emit(tally, response::status_uptime(self.ticks.now()));

        let stats = self.stats.snapshot();
        self.emit(tally, response::status_counters_header());
        for (label, count) in [
            ("Overflows", stats.framer_overflows),
            ("Queue full", stats.queue_full_drops),
            ("Timeouts", stats.write_timeouts),
            ("Unknown", stats.unknown_commands),
        ] {
            self.emit(tally, response::status_counter(label, count));
        }
    }

    /// Hand one formatted line to the writer
    fn emit(&mut self, tally: &mut Tally, line: Result<ResponseLine, ResponseError>) {
        let Ok(line) = line else {
            tally.dropped += 1;
            return;
        };

        match self.writer.write(line.as_bytes()) {
            WriteOutcome::Completed => tally.lines += 1,
            WriteOutcome::TimedOut => {
                tally.lines += 1;
                tally.timeouts += 1;
                self.stats.record_write_timeout();
            }
            WriteOutcome::NotStarted => tally.dropped += 1,
        }
    }

    /// Current register values
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Mutable access for board-level initialisation
    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.registers
    }

    /// The writer and its transport
    pub fn writer(&self) -> &TimeoutWriter<'a, T> {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::String;
    use std::vec::Vec;

    use super::*;
    use crate::writer::TransferComplete;

    /// Loopback transport recording every line it is asked to send
    struct CaptureTransport<'a> {
        complete: &'a TransferComplete,
        lines: Vec<String>,
    }

    impl TransportTx for CaptureTransport<'_> {
        type Error = ();

        fn start_write(&mut self, data: &[u8]) -> Result<(), ()> {
            self.lines.push(String::from_utf8_lossy(data).into_owned());
            self.complete.signal();
            Ok(())
        }
    }

    struct Fixture {
        complete: TransferComplete,
        ticks: TickCounter,
        stats: LinkStats,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                complete: TransferComplete::new(),
                ticks: TickCounter::new(),
                stats: LinkStats::new(),
            }
        }

        fn dispatcher(&self) -> Dispatcher<'_, CaptureTransport<'_>> {
            let transport = CaptureTransport {
                complete: &self.complete,
                lines: Vec::new(),
            };
            let writer = TimeoutWriter::new(transport, &self.complete, &self.ticks, 10);
            let identity = Identity {
                manufacturer: "ACME",
                model: "RF-1",
                serial: "0042",
                firmware_version: "1.3.8",
                hardware_version: "1.0",
            };
            Dispatcher::new(writer, identity, &self.ticks, &self.stats)
        }
    }

    fn sent<'d>(d: &'d Dispatcher<'_, CaptureTransport<'_>>) -> &'d [String] {
        &d.writer().transport().lines
    }

    #[test]
    fn test_read_register_zero() {
        let fx = Fixture::new();
        let mut d = fx.dispatcher();

        let result = d.execute(b"rr1");
        assert_eq!(sent(&d), ["0x0\r\n"]);
        assert_eq!(
            result,
            Dispatched::Executed {
                command: Command::ReadRegister { id: 1 },
                lines: 1,
                timeouts: 0,
                dropped: 0,
            }
        );
    }

    #[test]
    fn test_write_then_read() {
        let fx = Fixture::new();
        let mut d = fx.dispatcher();

        d.execute(b"wr0150");
        assert_eq!(d.registers().read(RegisterId::R1), 0x50);

        d.execute(b"rr1");
        assert_eq!(sent(&d), ["0x50\r\n", "0x50\r\n"]);
    }

    #[test]
    fn test_unknown_register() {
        let fx = Fixture::new();
        let mut d = fx.dispatcher();

        d.execute(b"rr9");
        d.execute(b"wr0912");
        assert_eq!(sent(&d), ["0xffff\r\n", "0xffff\r\n"]);
        assert_eq!(*d.registers(), RegisterFile::new());
    }

    #[test]
    fn test_write_malformed_value_is_permissive() {
        let fx = Fixture::new();
        let mut d = fx.dispatcher();

        d.execute(b"wr02zz");
        assert_eq!(d.registers().read(RegisterId::R2), 0);
        assert_eq!(sent(&d), ["0x0\r\n"]);
    }

    #[test]
    fn test_identify() {
        let fx = Fixture::new();
        let mut d = fx.dispatcher();

        d.execute(b"*IDN?");
        assert_eq!(sent(&d), ["ACME, RF-1, 0042, 1.3.8/1.0\r\n"]);
    }

    #[test]
    fn test_status_dump() {
        let fx = Fixture::new();
        let mut d = fx.dispatcher();
        d.registers_mut().write(RegisterId::R2, 0xAB);
        for _ in 0..1234 {
            fx.ticks.tick();
        }

        let result = d.execute(b"sts?");
        assert_eq!(
            sent(&d),
            [
                "\r\n** Registers **\r\n",
                "Reg 0x01:\t0x0\r\n",
                "Reg 0x02:\t0xab\r\n",
                "Reg 0x03:\t0x0\r\n",
                "Board Millis:\t1234\r\n",
                "** Counters **\r\n",
                "Overflows:\t0\r\n",
                "Queue full:\t0\r\n",
                "Timeouts:\t0\r\n",
                "Unknown:\t0\r\n",
            ]
        );
        assert!(matches!(result, Dispatched::Executed { lines: 10, .. }));
    }

    #[test]
    fn test_unknown_command_silent() {
        let fx = Fixture::new();
        let mut d = fx.dispatcher();

        assert_eq!(d.execute(b"hello"), Dispatched::Ignored);
        assert_eq!(d.execute(b""), Dispatched::Ignored);
        assert!(sent(&d).is_empty());
        assert_eq!(fx.stats.snapshot().unknown_commands, 2);
    }

    #[test]
    fn test_poll_from_queue() {
        let fx = Fixture::new();
        let mut d = fx.dispatcher();
        let queue = SharedRecordQueue::<4, 16>::new();

        assert_eq!(d.poll(&queue), None);

        queue.push(b"wr03ff").unwrap();
        queue.push(b"rr3").unwrap();
        assert!(d.poll(&queue).is_some());
        assert!(d.poll(&queue).is_some());
        assert_eq!(d.poll(&queue), None);

        assert_eq!(sent(&d), ["0xff\r\n", "0xff\r\n"]);
    }

    #[test]
    fn test_write_timeout_counted() {
        struct Stalled;
        impl TransportTx for Stalled {
            type Error = ();
            fn start_write(&mut self, _data: &[u8]) -> Result<(), ()> {
                Ok(())
            }
        }

        let complete = TransferComplete::new();
        let ticks = TickCounter::new();
        let stats = LinkStats::new();
        let writer = TimeoutWriter::new(Stalled, &complete, &ticks, 0);
        let mut d = Dispatcher::new(writer, Identity::default(), &ticks, &stats);

        // One tick once the transfer has started, as the timer would
        let result = std::thread::scope(|s| {
            s.spawn(|| {
                while complete.is_complete() {
                    std::thread::yield_now();
                }
                ticks.tick();
            });
            d.execute(b"rr1")
        });

        assert_eq!(
            result,
            Dispatched::Executed {
                command: Command::ReadRegister { id: 1 },
                lines: 1,
                timeouts: 1,
                dropped: 0,
            }
        );
        assert_eq!(stats.snapshot().write_timeouts, 1);
    }
}
