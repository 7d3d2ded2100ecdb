//! Status LED

use embassy_rp::gpio::Output;

use regfifo_hal::OutputPin;

/// Active-high LED on a GPIO output
pub struct StatusLed {
    pin: Output<'static>,
}

impl StatusLed {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for StatusLed {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
