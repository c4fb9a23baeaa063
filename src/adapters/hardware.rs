//! Hardware adapters: bridge real peripherals to domain port traits.
//!
//! Two bundles, one per execution context:
//!
//! - [`TickOutputs`]: the ring lines and status lines, built on the stack
//!   by the tick callback.
//! - [`TagHardware`]: the IR emitter and receiver plus the shared-core
//!   clock, owned by the main loop.
//!
//! On non-espidf targets the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::{
    CharlieplexPort, IrCarrierPort, IrReceiverPort, PresenceLink, StatusPort, TockSource,
};
use crate::display::pin_image::DrivePattern;
use crate::drivers::charlieplex::CharlieplexDriver;
use crate::drivers::gpio::RawGpio;
use crate::drivers::ir::{IrReceiver, IrTransmitter};
use crate::drivers::status_lines::StatusLineDriver;
use crate::fsm::context::StatusLines;
use crate::pattern::Mode;
use crate::pins;

use super::time::CoreClock;

// ── Tick side ─────────────────────────────────────────────────

pub struct TickOutputs {
    ring: CharlieplexDriver,
    status: StatusLineDriver<RawGpio, RawGpio>,
}

impl TickOutputs {
    pub const fn new() -> Self {
        Self {
            ring: CharlieplexDriver::new(),
            status: StatusLineDriver::new(
                RawGpio::new(pins::STATUS_WATCHDOG_GPIO),
                RawGpio::new(pins::STATUS_ALERT_GPIO),
            ),
        }
    }
}

impl Default for TickOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl CharlieplexPort for TickOutputs {
    fn drive(&mut self, pattern: DrivePattern) {
        self.ring.drive(pattern);
    }
}

impl StatusPort for TickOutputs {
    fn set_status(&mut self, lines: StatusLines) {
        self.status.set_status(lines);
    }
}

// ── Main-loop side ────────────────────────────────────────────

/// Concrete adapter that combines the main loop's hardware behind port
/// traits.
pub struct TagHardware<'a> {
    clock: CoreClock<'a>,
    tx: IrTransmitter,
    rx: IrReceiver<RawGpio>,
}

impl<'a> TagHardware<'a> {
    pub const fn new(clock: CoreClock<'a>) -> Self {
        Self {
            clock,
            tx: IrTransmitter::new(),
            rx: IrReceiver::new(RawGpio::new(pins::IR_RX_GPIO)),
        }
    }

    pub const fn transmitter(&self) -> &IrTransmitter {
        &self.tx
    }
}

impl TockSource for TagHardware<'_> {
    fn tocks(&self) -> u16 {
        self.clock.tocks()
    }
}

impl PresenceLink for TagHardware<'_> {
    fn report_ir_edge(&mut self) -> u16 {
        self.clock.report_ir_edge()
    }

    fn mode(&self) -> Mode {
        self.clock.mode()
    }
}

impl IrCarrierPort for TagHardware<'_> {
    fn start_carrier(&mut self, hz: u32) {
        self.tx.start_carrier(hz);
    }

    fn stop_carrier(&mut self) {
        self.tx.stop_carrier();
    }

    fn force_output_low(&mut self) {
        self.tx.force_output_low();
    }
}

impl IrReceiverPort for TagHardware<'_> {
    fn is_asserted(&mut self) -> bool {
        self.rx.is_asserted()
    }
}
