//! Unified error types for the name-tag firmware.
//!
//! Runtime hardware paths are infallible; everything that can fail does so at
//! boot.  Configuration problems land here; peripheral bring-up reports its
//! own [`HwInitError`](crate::drivers::hw_init::HwInitError).  All variants
//! are `Copy` so they can be logged and returned without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The compiled-in configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A period or timeout that must count at least one unit is zero.
    ZeroPeriod(&'static str),
    /// A start position lies outside the 24-position ring.
    PositionOutOfRing { pixel: u8, position: u8 },
    /// The transmit interval leaves no room for the burst and deaf time.
    TransmitIntervalTooShort,
    /// IR carrier outside what the receiver module demodulates.
    CarrierOutOfRange(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPeriod(field) => write!(f, "{field} must be non-zero"),
            Self::PositionOutOfRing { pixel, position } => {
                write!(f, "pixel {pixel} start position {position} is off the ring")
            }
            Self::TransmitIntervalTooShort => {
                write!(f, "transmit interval shorter than pulse + deaf time")
            }
            Self::CarrierOutOfRange(hz) => write!(f, "IR carrier {hz} Hz out of range"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
