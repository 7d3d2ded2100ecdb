//! Millisecond tick counter
//!
//! Incremented by exactly one producer (the periodic timer context) and read
//! by everyone else. It is never reset and wraps silently at `u32::MAX`;
//! every comparison goes through [`TickCounter::elapsed_since`], which uses
//! wrapping subtraction so a wrap between two reads is harmless.

use portable_atomic::{AtomicU32, Ordering};

/// Process-wide monotonic millisecond counter
#[derive(Debug)]
pub struct TickCounter {
    millis: AtomicU32,
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickCounter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self {
            millis: AtomicU32::new(0),
        }
    }

    /// Advance by one tick
    ///
    /// Only the timer context may call this. With a single writer a plain
    /// load/store is enough and avoids a read-modify-write, which thumbv6m
    /// cannot do natively.
    pub fn tick(&self) {
        let now = self.millis.load(Ordering::Relaxed);
        self.millis.store(now.wrapping_add(1), Ordering::Relaxed);
    }

    /// Current tick value
    pub fn now(&self) -> u32 {
        self.millis.load(Ordering::Relaxed)
    }

    /// Ticks elapsed since `start`, correct across one wraparound
    pub fn elapsed_since(&self, start: u32) -> u32 {
        self.now().wrapping_sub(start)
    }

    /// Check if strictly more than `timeout_ms` ticks have passed since `start`
    pub fn expired(&self, start: u32, timeout_ms: u32) -> bool {
        self.elapsed_since(start) > timeout_ms
    }

    /// Force the counter to `value`
    ///
    /// Test hook for exercising wraparound.
    #[cfg(test)]
    pub(crate) fn set(&self, value: u32) {
        self.millis.store(value, Ordering::Relaxed);
    }
}
