//! Shared mutable context threaded through every FSM handler.
//!
//! `PresenceContext` is what the state handlers read and write: the IR
//! watchdog counter, its timeout, and the two status lines reported to the
//! debug header.

// ---------------------------------------------------------------------------
// Status lines (written by state handlers; mirrored onto GPIO every tock)
// ---------------------------------------------------------------------------

/// The two presence indicator outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusLines {
    /// Watchdog still counting towards its timeout ("powered / alive").
    pub watchdog_active: bool,
    /// An IR edge arrived and the watchdog has not yet expired.
    pub alerted: bool,
}

impl StatusLines {
    /// Both lines low.
    pub const CLEAR: Self = Self {
        watchdog_active: false,
        alerted: false,
    };
}

// ---------------------------------------------------------------------------
// Top-level context
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PresenceContext {
    /// Tocks since the last IR edge, saturating at `timeout`.
    pub watchdog: u16,
    /// Watchdog value at which Alerted falls back to Listening.
    pub timeout: u16,
    /// Indicator outputs.
    pub status: StatusLines,
}

impl PresenceContext {
    /// Boot context: watchdog preset to its timeout so the first tock
    /// expires it, watchdog line high, alert line low.
    pub const fn new(timeout: u16) -> Self {
        Self {
            watchdog: timeout,
            timeout,
            status: StatusLines {
                watchdog_active: true,
                alerted: false,
            },
        }
    }

    /// Whether the watchdog has reached its timeout.
    pub const fn timed_out(&self) -> bool {
        self.watchdog >= self.timeout
    }
}
