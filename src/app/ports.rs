//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ TagCore / TagService (domain)
//! ```
//!
//! Two contexts consume ports.  The tick interrupt drives the LED ring and
//! the status lines through [`CharlieplexPort`] and [`StatusPort`]; the main
//! loop reaches the IR hardware and the shared core through the rest.  The
//! domain is generic over all of them, so every path runs against mocks on
//! the host.

use crate::display::pin_image::DrivePattern;
use crate::fsm::context::StatusLines;
use crate::pattern::Mode;

pub use crate::timebase::TockSource;

// ───────────────────────────────────────────────────────────────
// Tick-side ports (driven from the timer interrupt)
// ───────────────────────────────────────────────────────────────

/// The nine tri-state ring lines.
pub trait CharlieplexPort {
    /// Release every line, then apply `pattern`.  Called once per tick.
    fn drive(&mut self, pattern: DrivePattern);
}

/// The two presence indicator outputs.
pub trait StatusPort {
    /// Called at every tock boundary, and on the next tick after the lines
    /// change between boundaries (boot, IR edge).
    fn set_status(&mut self, lines: StatusLines);
}

// ───────────────────────────────────────────────────────────────
// Main-loop ports
// ───────────────────────────────────────────────────────────────

/// Modulated IR emitter.
pub trait IrCarrierPort {
    /// Start a 50 % duty carrier at `hz`.
    fn start_carrier(&mut self, hz: u32);

    /// Stop the carrier.
    fn stop_carrier(&mut self);

    /// Drive the emitter pin low as plain output so it cannot float on.
    fn force_output_low(&mut self);
}

/// Demodulating IR receiver.
pub trait IrReceiverPort {
    /// `true` while another tag's carrier is being received.  Adapters
    /// invert active-low hardware.
    fn is_asserted(&mut self) -> bool;
}

/// The main loop's view of the interrupt-side core.  Each call takes the
/// shared lock once.
pub trait PresenceLink {
    /// Record an IR edge.  Returns the tock at which it was recorded.
    fn report_ir_edge(&mut self) -> u16;

    /// Current pattern mode.
    fn mode(&self) -> Mode;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
