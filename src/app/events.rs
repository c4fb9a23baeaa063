//! Outbound application events.
//!
//! The [`TagService`](super::service::TagService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Every event carries the tock
//! at which it was observed.

use crate::pattern::Mode;

/// Structured events emitted by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The main loop has started (carries the initial mode).
    Started { tock: u16, mode: Mode },

    /// The IR receive line went from idle to asserted.
    PresenceDetected { tock: u16 },

    /// The IR carrier was switched on.
    TransmitStarted { tock: u16 },

    /// The IR carrier was switched off and the emitter forced low.
    TransmitFinished { tock: u16 },

    /// The deaf time after a burst has passed; polling resumes.
    ListeningResumed { tock: u16 },

    /// The pattern mode changed since the main loop last looked.
    ModeChanged { from: Mode, to: Mode, tock: u16 },
}

impl AppEvent {
    /// Tock stamp of the event.
    pub const fn tock(&self) -> u16 {
        match *self {
            Self::Started { tock, .. }
            | Self::PresenceDetected { tock }
            | Self::TransmitStarted { tock }
            | Self::TransmitFinished { tock }
            | Self::ListeningResumed { tock }
            | Self::ModeChanged { tock, .. } => tock,
        }
    }
}
