//! Application core: the main-loop side of the firmware.
//!
//! The transmit/listen cycle lives in [`service`].  All interaction with
//! hardware and with the interrupt-side core happens through the **port
//! traits** in [`ports`], keeping this layer testable without real
//! peripherals.

pub mod events;
pub mod ports;
pub mod service;
