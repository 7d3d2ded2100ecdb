//! Status blink state machine
//!
//! Two states timed from the tick counter. Driven once per control loop
//! iteration; it never waits, it only compares the current tick against the
//! time of the last transition.

use regfifo_hal::OutputPin;

/// Indicator phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    Off,
    On,
}

/// Heartbeat indicator, on for `on_ms` then off for `off_ms`
#[derive(Debug, Clone)]
pub struct BlinkIndicator {
    phase: Phase,
    /// Tick of the last transition
    since: u32,
    on_ms: u32,
    off_ms: u32,
}

impl BlinkIndicator {
    /// Create an indicator in the off phase, starting at tick zero
    pub const fn new(on_ms: u32, off_ms: u32) -> Self {
        Self {
            phase: Phase::Off,
            since: 0,
            on_ms,
            off_ms,
        }
    }

    /// Advance to `now` and drive `pin`
    ///
    /// Returns true if the pin changed.
    pub fn update<P: OutputPin>(&mut self, now: u32, pin: &mut P) -> bool {
        let elapsed = now.wrapping_sub(self.since);
        let (next, hold) = match self.phase {
            Phase::Off => (Phase::On, self.off_ms),
            Phase::On => (Phase::Off, self.on_ms),
        };

        if elapsed < hold {
            return false;
        }

        self.phase = next;
        self.since = now;
        pin.set_state(next == Phase::On);
        true
    }

    /// Check if the indicator is in its on phase
    pub fn is_on(&self) -> bool {
        self.phase == Phase::On
    }
}
