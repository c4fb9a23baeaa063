//! System configuration parameters
//!
//! All tunable timing for the name-tag.  The values are compiled in; there is
//! no persistent store, so `validate()` runs once at boot to catch a bad edit.

use serde::{Deserialize, Serialize};

use crate::display::pin_image::RING_SIZE;
use crate::error::ConfigError;
use crate::timebase::TICKS_PER_TOCK;

/// Core tag configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagConfig {
    // --- Time base ---
    /// Display tick period (microseconds)
    pub tick_period_us: u32,

    // --- Presence protocol ---
    /// Tocks without an IR edge before Alerted falls back to Listening
    pub watchdog_timeout_tocks: u16,
    /// Listening window between two transmissions (tocks)
    pub transmit_after_tocks: u16,
    /// IR burst length (tocks)
    pub ir_pulse_tocks: u16,
    /// Receiver-ignored gap after a burst (tocks)
    pub ir_deaf_tocks: u16,
    /// IR carrier frequency (Hz)
    pub ir_carrier_hz: u32,

    // --- Pattern engine ---
    /// Chase reload target per visible pixel (tocks)
    pub chase_periods: [u8; 3],
    /// Colour wheel step period (tocks)
    pub color_period: u8,
    /// Boot ring position per visible pixel
    pub start_positions: [u8; 3],
    /// xorshift16 seed
    pub random_seed: u16,
}

impl TagConfig {
    /// Shipping configuration.  `const` so the interrupt-side core can be
    /// built in a `static` initialiser.
    pub const DEFAULT: Self = Self {
        // Time base
        tick_period_us: 500, // 2 kHz tick, 27 ticks per tock

        // Presence
        watchdog_timeout_tocks: 4444, // ~60 s
        transmit_after_tocks: 4074,   // ~55 s
        ir_pulse_tocks: 2,            // ~27 ms burst
        ir_deaf_tocks: 2,
        ir_carrier_hz: 38_000,

        // Pattern
        chase_periods: [113, 11, 9],
        color_period: 253, // ~3.4 s per wheel step
        start_positions: [0, 8, 16],
        random_seed: 1,
    };

    /// Check every field against the ranges the firmware can honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_us == 0 {
            return Err(ConfigError::ZeroPeriod("tick_period_us"));
        }
        if self.watchdog_timeout_tocks == 0 {
            return Err(ConfigError::ZeroPeriod("watchdog_timeout_tocks"));
        }
        if self.ir_pulse_tocks == 0 {
            return Err(ConfigError::ZeroPeriod("ir_pulse_tocks"));
        }
        if self.color_period == 0 {
            return Err(ConfigError::ZeroPeriod("color_period"));
        }
        if self.chase_periods.contains(&0) {
            return Err(ConfigError::ZeroPeriod("chase_periods"));
        }
        for (pixel, &position) in self.start_positions.iter().enumerate() {
            if position >= RING_SIZE {
                return Err(ConfigError::PositionOutOfRing {
                    pixel: pixel as u8,
                    position,
                });
            }
        }
        let burst = u32::from(self.ir_pulse_tocks) + u32::from(self.ir_deaf_tocks);
        if u32::from(self.transmit_after_tocks) < burst {
            return Err(ConfigError::TransmitIntervalTooShort);
        }
        if !(30_000..=60_000).contains(&self.ir_carrier_hz) {
            return Err(ConfigError::CarrierOutOfRange(self.ir_carrier_hz));
        }
        Ok(())
    }

    /// Length of one tock in microseconds.
    pub const fn tock_period_us(&self) -> u32 {
        self.tick_period_us.saturating_mul(TICKS_PER_TOCK as u32)
    }

    /// Convert a tock count to whole milliseconds.
    pub const fn tocks_to_ms(&self, tocks: u16) -> u32 {
        ((tocks as u64 * self.tock_period_us() as u64) / 1000) as u32
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
