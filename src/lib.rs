//! Name-tag firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod fsm;
pub mod pattern;
pub mod pins;
pub mod presence;
pub mod scheduler;
pub mod shared;
pub mod tag;
pub mod timebase;

// The ESP-IDF-only parts are cfg-guarded inside; host builds get the
// simulation stubs.
pub mod adapters;
pub mod drivers;

// Links esp-idf-hal's `critical-section` implementation on the target.
#[cfg(target_os = "espidf")]
use esp_idf_hal as _;
