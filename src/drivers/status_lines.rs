//! Presence status outputs.
//!
//! Two plain digital outputs on the debug header: "watchdog active" and
//! "alerted".  Generic over `embedded-hal` pins so the tick path can be
//! exercised with recording pins on the host.

use embedded_hal::digital::OutputPin;

use crate::app::ports::StatusPort;
use crate::fsm::context::StatusLines;

pub struct StatusLineDriver<W, A> {
    watchdog: W,
    alert: A,
    current: StatusLines,
}

impl<W: OutputPin, A: OutputPin> StatusLineDriver<W, A> {
    pub const fn new(watchdog: W, alert: A) -> Self {
        Self {
            watchdog,
            alert,
            current: StatusLines::CLEAR,
        }
    }

    pub const fn current(&self) -> StatusLines {
        self.current
    }
}

fn write_line(pin: &mut impl OutputPin, high: bool) {
    // Dropped: the next tock rewrites both lines.
    let _ = if high { pin.set_high() } else { pin.set_low() };
}

impl<W: OutputPin, A: OutputPin> StatusPort for StatusLineDriver<W, A> {
    fn set_status(&mut self, lines: StatusLines) {
        write_line(&mut self.watchdog, lines.watchdog_active);
        write_line(&mut self.alert, lines.alerted);
        self.current = lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct Pin(Vec<bool>);

    impl ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.push(true);
            Ok(())
        }
    }

    #[test]
    fn writes_both_lines_every_call() {
        let mut drv = StatusLineDriver::new(Pin::default(), Pin::default());
        drv.set_status(StatusLines {
            watchdog_active: true,
            alerted: false,
        });
        drv.set_status(StatusLines::CLEAR);
        assert_eq!(drv.watchdog.0, vec![true, false]);
        assert_eq!(drv.alert.0, vec![false, false]);
        assert_eq!(drv.current(), StatusLines::CLEAR);
    }
}
