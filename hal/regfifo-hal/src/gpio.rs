//! GPIO pin abstractions
//!
//! The only pin the command firmware drives is the status indicator, so
//! this module is limited to a digital output.

/// Digital output pin
///
/// `set_high` means "asserted". Boards with an active-low indicator invert
/// the level in their implementation.
pub trait OutputPin {
    /// Assert the pin (logic 1)
    fn set_high(&mut self);

    /// Deassert the pin (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently asserted
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently deasserted
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
