//! Application service: the cooperative transmit/listen cycle.
//!
//! [`TagService`] owns nothing but the cycle anchor and a little edge
//! tracking; the clock, the IR hardware and the shared core all arrive
//! through port traits at call sites.
//!
//! ```text
//!   ┌──────────── listen (4074) ─────────────┐┌ burst (2) ┐┌ deaf (2) ┐
//!   │ poll IR rx, report edges to the core   ││ carrier on││ rx ignored│
//!   └────────────────────────────────────────┘└───────────┘└──────────┘
//!   anchor                                  +4074       +4076      +4078
//! ```
//!
//! Waits are relative to the anchor, which advances by exactly the
//! requested delta each time, so the cycle period never drifts.

use log::info;

use crate::config::TagConfig;
use crate::pattern::Mode;
use crate::timebase::TockWaiter;

use super::events::AppEvent;
use super::ports::{EventSink, IrCarrierPort, IrReceiverPort, PresenceLink, TockSource};

// ───────────────────────────────────────────────────────────────
// TagService
// ───────────────────────────────────────────────────────────────

pub struct TagService {
    waiter: TockWaiter,
    listen_tocks: u16,
    pulse_tocks: u16,
    deaf_tocks: u16,
    carrier_hz: u32,
    /// Receive line level at the previous poll.
    rx_was_asserted: bool,
    /// Mode last reported through the sink.
    last_mode: Mode,
    cycles: u32,
}

impl TagService {
    /// Construct the service, anchoring the first cycle at the current tock.
    pub fn new(config: &TagConfig, hw: &(impl TockSource + PresenceLink)) -> Self {
        Self {
            waiter: TockWaiter::new(hw.tocks()),
            listen_tocks: config.transmit_after_tocks,
            pulse_tocks: config.ir_pulse_tocks,
            deaf_tocks: config.ir_deaf_tocks,
            carrier_hz: config.ir_carrier_hz,
            rx_was_asserted: false,
            last_mode: hw.mode(),
            cycles: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        let tock = self.waiter.anchor();
        sink.emit(&AppEvent::Started {
            tock,
            mode: self.last_mode,
        });
        info!("TagService started at tock {} in {:?}", tock, self.last_mode);
    }

    /// Run cycles forever.
    ///
    /// The waits busy-poll and never block, so on ESP-IDF the calling task
    /// starves the idle task on its core.  `sdkconfig.defaults` takes the
    /// idle tasks off the task watchdog for that reason.
    pub fn run(
        &mut self,
        hw: &mut (impl TockSource + PresenceLink + IrCarrierPort + IrReceiverPort),
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.run_cycle(hw, sink);
        }
    }

    // ── One cycle ─────────────────────────────────────────────

    /// Listen, transmit one burst, sit out the deaf time.
    pub fn run_cycle(
        &mut self,
        hw: &mut (impl TockSource + PresenceLink + IrCarrierPort + IrReceiverPort),
        sink: &mut impl EventSink,
    ) {
        let mut waiter = self.waiter;

        // 1. Listen window: every asserted poll refreshes the watchdog.
        let now = waiter.wait_until(self.listen_tocks, hw, |hw| self.poll_receiver(hw, sink));
        self.note_mode(&*hw, now, sink);

        // 2. Burst.
        hw.start_carrier(self.carrier_hz);
        sink.emit(&AppEvent::TransmitStarted { tock: now });

        let now = waiter.wait_until(self.pulse_tocks, hw, |_| {});
        hw.stop_carrier();
        hw.force_output_low();
        sink.emit(&AppEvent::TransmitFinished { tock: now });

        // 3. Deaf time: our own burst may still be echoing.
        let now = waiter.wait_until(self.deaf_tocks, hw, |_| {});
        self.rx_was_asserted = false;
        sink.emit(&AppEvent::ListeningResumed { tock: now });
        self.note_mode(&*hw, now, sink);

        self.waiter = waiter;
        self.cycles = self.cycles.wrapping_add(1);
    }

    // ── Queries ───────────────────────────────────────────────

    pub const fn anchor(&self) -> u16 {
        self.waiter.anchor()
    }

    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    // ── Internal ──────────────────────────────────────────────

    fn poll_receiver(
        &mut self,
        hw: &mut (impl PresenceLink + IrReceiverPort),
        sink: &mut impl EventSink,
    ) {
        let asserted = hw.is_asserted();
        if asserted {
            let tock = hw.report_ir_edge();
            if !self.rx_was_asserted {
                sink.emit(&AppEvent::PresenceDetected { tock });
            }
            self.note_mode(&*hw, tock, sink);
        }
        self.rx_was_asserted = asserted;
    }

    fn note_mode(&mut self, hw: &impl PresenceLink, tock: u16, sink: &mut impl EventSink) {
        let mode = hw.mode();
        if mode != self.last_mode {
            sink.emit(&AppEvent::ModeChanged {
                from: self.last_mode,
                to: mode,
                tock,
            });
            self.last_mode = mode;
        }
    }
}
