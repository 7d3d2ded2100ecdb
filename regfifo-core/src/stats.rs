//! Link statistics
//!
//! Every silent drop in the command path is counted here: lines longer than
//! a record, lines rejected by a full queue, writes that timed out and
//! unrecognised commands. Behavior is unchanged (data is still dropped),
//! but the drops become observable through the status dump and the log.

use portable_atomic::{AtomicU32, Ordering};

/// Drop and timeout counters, shared between contexts
///
/// Each counter has exactly one writing context, so increments are a plain
/// load/store pair.
#[derive(Debug)]
pub struct LinkStats {
    framer_overflows: AtomicU32,
    queue_full_drops: AtomicU32,
    write_timeouts: AtomicU32,
    unknown_commands: AtomicU32,
}

/// Point-in-time copy of [`LinkStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatsSnapshot {
    /// Lines discarded for exceeding the record size
    pub framer_overflows: u32,
    /// Complete lines discarded because the queue was full
    pub queue_full_drops: u32,
    /// Response writes abandoned at the deadline
    pub write_timeouts: u32,
    /// Records that matched no command
    pub unknown_commands: u32,
}

impl Default for LinkStats {
    fn default() -> Self {
        Self::new()
    }
}

fn bump(counter: &AtomicU32) {
    let value = counter.load(Ordering::Relaxed);
    counter.store(value.wrapping_add(1), Ordering::Relaxed);
}

impl LinkStats {
    /// All counters at zero
    pub const fn new() -> Self {
        Self {
            framer_overflows: AtomicU32::new(0),
            queue_full_drops: AtomicU32::new(0),
            write_timeouts: AtomicU32::new(0),
            unknown_commands: AtomicU32::new(0),
        }
    }

    /// Receive context only
    pub fn record_framer_overflow(&self) {
        bump(&self.framer_overflows);
    }

    /// Receive context only
    pub fn record_queue_full(&self) {
        bump(&self.queue_full_drops);
    }

    /// Control loop only
    pub fn record_write_timeout(&self) {
        bump(&self.write_timeouts);
    }

    /// Control loop only
    pub fn record_unknown_command(&self) {
        bump(&self.unknown_commands);
    }

    /// Copy all counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            framer_overflows: self.framer_overflows.load(Ordering::Relaxed),
            queue_full_drops: self.queue_full_drops.load(Ordering::Relaxed),
            write_timeouts: self.write_timeouts.load(Ordering::Relaxed),
            unknown_commands: self.unknown_commands.load(Ordering::Relaxed),
        }
    }
}
