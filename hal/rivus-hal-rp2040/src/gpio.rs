//! GPIO wrappers implementing the `rivus-hal` pin traits

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

use rivus_hal::gpio::{InputPin, OutputPin};

/// Digital input pin backed by an embassy-rp `Input`
pub struct DigitalInput<'d> {
    pin: Input<'d>,
}

impl<'d> DigitalInput<'d> {
    /// Configure a pin as an input with the given pull
    pub fn new(pin: Peri<'d, AnyPin>, pull: Pull) -> Self {
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl InputPin for DigitalInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Digital output pin backed by an embassy-rp `Output`
pub struct DigitalOutput<'d> {
    pin: Output<'d>,
}

impl<'d> DigitalOutput<'d> {
    /// Configure a pin as an output, starting low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for DigitalOutput<'_> {
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
