//! Build-time configuration constants
//!
//! These are fixed at compile time; nothing here is runtime tunable.

pub use regfifo_protocol::TX_LINE_MAX;

use crate::queue::SharedRecordQueue;

/// Number of record slots in the command queue
pub const QUEUE_SLOTS: usize = 8;

/// Size of one record in bytes (longest accepted command line)
pub const RECORD_SIZE: usize = 16;

/// How long a response write may take before it is abandoned
pub const WRITE_TIMEOUT_MS: u32 = 10;

/// Period of the tick counter
pub const TICK_PERIOD_MS: u64 = 1;

/// Status indicator on time per blink cycle
pub const LED_ON_TIME_MS: u32 = 50;

/// Status indicator off time per blink cycle
pub const LED_OFF_TIME_MS: u32 = 950;

/// The command queue as sized for the firmware
pub type CommandQueue = SharedRecordQueue<QUEUE_SLOTS, RECORD_SIZE>;
