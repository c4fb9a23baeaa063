//! IR emitter and receiver.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: the emitter is an LEDC channel for the carrier and plain
//! GPIO when idle; the receiver is a demodulator module on an input pin.
//! On host/test: the emitter tracks state in-memory only.

use embedded_hal::digital::InputPin;
use log::debug;

use crate::app::ports::{IrCarrierPort, IrReceiverPort};
use crate::drivers::hw_init;
use crate::pins;

// ── Emitter ───────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct IrTransmitter {
    carrier_hz: Option<u32>,
    bursts: u32,
}

impl IrTransmitter {
    pub const fn new() -> Self {
        Self {
            carrier_hz: None,
            bursts: 0,
        }
    }

    pub const fn is_transmitting(&self) -> bool {
        self.carrier_hz.is_some()
    }

    pub const fn bursts(&self) -> u32 {
        self.bursts
    }
}

impl IrCarrierPort for IrTransmitter {
    fn start_carrier(&mut self, hz: u32) {
        hw_init::ledc_start_carrier(hz);
        self.carrier_hz = Some(hz);
        self.bursts = self.bursts.wrapping_add(1);
        debug!("ir: carrier on at {} Hz", hz);
    }

    fn stop_carrier(&mut self) {
        hw_init::ledc_stop_carrier();
        self.carrier_hz = None;
    }

    fn force_output_low(&mut self) {
        hw_init::gpio_force_low(pins::IR_TX_GPIO);
    }
}

// ── Receiver ──────────────────────────────────────────────────

/// Active-low demodulator output.
pub struct IrReceiver<P> {
    pin: P,
}

impl<P: InputPin> IrReceiver<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> IrReceiverPort for IrReceiver<P> {
    fn is_asserted(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}
