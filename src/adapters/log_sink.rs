//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { tock, mode } => {
                info!("START | tock={} | mode={:?}", tock, mode);
            }
            AppEvent::PresenceDetected { tock } => {
                info!("IR | tag detected | tock={}", tock);
            }
            AppEvent::TransmitStarted { tock } => {
                info!("IR | tx on | tock={}", tock);
            }
            AppEvent::TransmitFinished { tock } => {
                info!("IR | tx off | tock={}", tock);
            }
            AppEvent::ListeningResumed { tock } => {
                info!("IR | listening | tock={}", tock);
            }
            AppEvent::ModeChanged { from, to, tock } => {
                info!("MODE | {:?} -> {:?} | tock={}", from, to, tock);
            }
        }
    }
}
