//! `embedded-hal` digital pin over a raw GPIO number.
//!
//! Thin wrapper around the [`hw_init`](super::hw_init) helpers so drivers
//! can be written against `OutputPin` / `InputPin` and tested with any
//! other implementation.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use super::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawGpio {
    pin: i32,
}

impl RawGpio {
    /// The pin must already be configured by `hw_init::init_peripherals`.
    pub const fn new(pin: i32) -> Self {
        Self { pin }
    }
}

impl ErrorType for RawGpio {
    type Error = Infallible;
}

impl OutputPin for RawGpio {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, true);
        Ok(())
    }
}

impl InputPin for RawGpio {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(hw_init::gpio_read(self.pin))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!hw_init::gpio_read(self.pin))
    }
}
