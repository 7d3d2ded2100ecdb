//! Board-agnostic core logic for the register command firmware
//!
//! This crate contains everything between the transport and the register
//! file that does not depend on a specific chip:
//!
//! - Tick counter (wraparound-safe millisecond time base)
//! - Bounded record queue shared by the receive context and the control loop
//! - Receiver that frames transport bytes into queued records
//! - Command dispatcher and register file
//! - Timeout-guarded writer
//! - Drop/timeout counters and the status blink state machine
//!
//! Two execution contexts use this crate: a preemptive, short-running
//! context (byte reception, write completion, timer tick) and a single
//! cooperative control loop. Everything touched by both is either an
//! atomic or lives in the critical-section protected [`queue::SharedRecordQueue`].

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatcher;
pub mod indicator;
pub mod queue;
pub mod receiver;
pub mod registers;
pub mod stats;
pub mod tick;
pub mod writer;

pub use dispatcher::{Dispatched, Dispatcher};
pub use indicator::BlinkIndicator;
pub use queue::{QueueError, RecordQueue, SharedRecordQueue, SENTINEL};
pub use receiver::{FeedSummary, Receiver};
pub use registers::{RegisterFile, RegisterId};
pub use stats::{LinkStats, StatsSnapshot};
pub use tick::TickCounter;
pub use writer::{TimeoutWriter, TransferComplete, WriteOutcome};
