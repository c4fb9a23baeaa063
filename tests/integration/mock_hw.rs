//! Simulated tag for integration tests.
//!
//! Wraps a real [`TagCore`] behind the same [`Guarded`] lock the firmware
//! uses.  Reading the clock runs one full tock of ticks against a
//! recording port, so the main loop and the tick side interleave the way
//! they would on hardware with one tock of latency per poll.

use std::cell::RefCell;
use std::ops::Range;

use nametag::app::events::AppEvent;
use nametag::app::ports::{
    CharlieplexPort, EventSink, IrCarrierPort, IrReceiverPort, PresenceLink, StatusPort,
    TockSource,
};
use nametag::config::TagConfig;
use nametag::display::DrivePattern;
use nametag::fsm::StateId;
use nametag::fsm::context::StatusLines;
use nametag::pattern::{Mode, PIXEL_COUNT, VisiblePixel};
use nametag::shared::Guarded;
use nametag::tag::TagCore;
use nametag::timebase::TICKS_PER_TOCK;

// ── Output records ────────────────────────────────────────────

/// Everything the tick side wrote, in order.
#[derive(Debug, Default)]
pub struct RecordingOutputs {
    pub patterns: Vec<DrivePattern>,
    pub status: Vec<StatusLines>,
}

impl CharlieplexPort for RecordingOutputs {
    fn drive(&mut self, pattern: DrivePattern) {
        self.patterns.push(pattern);
    }
}

impl StatusPort for RecordingOutputs {
    fn set_status(&mut self, lines: StatusLines) {
        self.status.push(lines);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarrierCall {
    Start { hz: u32, tock: u16 },
    Stop { tock: u16 },
    ForceLow { tock: u16 },
}

// ── SimulatedTag ──────────────────────────────────────────────

pub struct SimulatedTag {
    core: Guarded<TagCore>,
    pub outputs: RefCell<RecordingOutputs>,
    /// Tock ranges during which the receiver sees another tag.
    pub ir_windows: Vec<Range<u16>>,
    pub carrier: Vec<CarrierCall>,
    pub edges_reported: u32,
}

#[allow(dead_code)]
impl SimulatedTag {
    /// A started core at tock 0.
    pub fn new(config: &TagConfig) -> Self {
        let core = Guarded::new(TagCore::new(config));
        core.lock(TagCore::start);
        Self {
            core,
            outputs: RefCell::new(RecordingOutputs::default()),
            ir_windows: Vec::new(),
            carrier: Vec::new(),
            edges_reported: 0,
        }
    }

    pub fn tick(&self) {
        let mut out = self.outputs.borrow_mut();
        self.core.lock(|c| c.on_tick(&mut *out));
    }

    pub fn advance_tocks(&self, n: u32) {
        for _ in 0..n * u32::from(TICKS_PER_TOCK) {
            self.tick();
        }
    }

    pub fn now(&self) -> u16 {
        self.core.lock(|c| c.tocks())
    }

    pub fn state(&self) -> StateId {
        self.core.lock(|c| c.state())
    }

    pub fn status(&self) -> StatusLines {
        self.core.lock(|c| c.status())
    }

    pub fn watchdog(&self) -> u16 {
        self.core.lock(|c| c.watchdog())
    }

    pub fn pixels(&self) -> [VisiblePixel; PIXEL_COUNT] {
        self.core.lock(|c| *c.pixels())
    }

    pub fn edge(&mut self) -> u16 {
        self.report_ir_edge()
    }

    /// Drive patterns recorded during tock `n` (zero-based).
    pub fn patterns_of_tock(&self, n: usize) -> Vec<DrivePattern> {
        let per = TICKS_PER_TOCK as usize;
        self.outputs
            .borrow()
            .patterns
            .iter()
            .skip(n * per)
            .take(per)
            .copied()
            .collect()
    }
}

impl TockSource for SimulatedTag {
    /// Returns the count, then lets one tock of ticks run.
    fn tocks(&self) -> u16 {
        let now = self.now();
        self.advance_tocks(1);
        now
    }
}

impl PresenceLink for SimulatedTag {
    fn report_ir_edge(&mut self) -> u16 {
        self.edges_reported += 1;
        self.core.lock(|c| {
            c.on_ir_edge();
            c.tocks()
        })
    }

    fn mode(&self) -> Mode {
        self.core.lock(|c| c.mode())
    }
}

impl IrCarrierPort for SimulatedTag {
    fn start_carrier(&mut self, hz: u32) {
        let tock = self.now();
        self.carrier.push(CarrierCall::Start { hz, tock });
    }

    fn stop_carrier(&mut self) {
        let tock = self.now();
        self.carrier.push(CarrierCall::Stop { tock });
    }

    fn force_output_low(&mut self) {
        let tock = self.now();
        self.carrier.push(CarrierCall::ForceLow { tock });
    }
}

impl IrReceiverPort for SimulatedTag {
    fn is_asserted(&mut self) -> bool {
        let now = self.now();
        self.ir_windows.iter().any(|w| w.contains(&now))
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode_changes(&self) -> Vec<AppEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ModeChanged { .. }))
            .copied()
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
