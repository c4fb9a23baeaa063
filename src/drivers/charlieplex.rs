//! Charlieplex line driver.
//!
//! Every tick: release all nine lines, then drive the selected pair.  The
//! release-first order means two LEDs are never on together, even for the
//! few cycles between writes.

use crate::app::ports::CharlieplexPort;
use crate::display::pin_image::DrivePattern;
use crate::drivers::hw_init;
use crate::pins::LedPin;

#[derive(Debug)]
pub struct CharlieplexDriver {
    last: DrivePattern,
}

impl CharlieplexDriver {
    pub const fn new() -> Self {
        Self {
            last: DrivePattern::OFF,
        }
    }

    pub const fn last(&self) -> DrivePattern {
        self.last
    }
}

impl Default for CharlieplexDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl CharlieplexPort for CharlieplexDriver {
    fn drive(&mut self, pattern: DrivePattern) {
        for pin in LedPin::ALL {
            hw_init::gpio_release(pin.gpio());
        }
        if let (Some(high), Some(low)) = (pattern.high(), pattern.low()) {
            hw_init::gpio_drive(high.gpio(), true);
            hw_init::gpio_drive(low.gpio(), false);
        }
        self.last = pattern;
    }
}
