//! Shared state between the interrupt executor and the control loop
//!
//! Everything here is a `static` so both execution contexts can reach it
//! without passing references through task arguments.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use regfifo_core::config::CommandQueue;
use regfifo_core::{LinkStats, TickCounter, TransferComplete};

use crate::transport::TxLine;

/// Outbound lines in flight; one at a time, the writer waits for each
const TX_CHANNEL_SIZE: usize = 1;

/// Millisecond tick counter, advanced by the tick task
pub static TICKS: TickCounter = TickCounter::new();

/// Raised by the serial TX task once a line has been flushed
pub static TX_COMPLETE: TransferComplete = TransferComplete::new();

/// Framed command lines waiting for the control loop
pub static COMMAND_QUEUE: CommandQueue = CommandQueue::new();

/// Drop and timeout counters
pub static LINK_STATS: LinkStats = LinkStats::new();

/// Response lines from the control loop to the serial TX task
pub static TX_LINES: Channel<CriticalSectionRawMutex, TxLine, TX_CHANNEL_SIZE> = Channel::new();
