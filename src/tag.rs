//! Interrupt-side core: everything one display tick touches.
//!
//! `TagCore` is owned by a [`Guarded`](crate::shared::Guarded) and only
//! ever reached through its lock.  The tick timer calls [`TagCore::on_tick`];
//! the main loop reads the tock counter and reports IR edges through the
//! same lock.

use log::info;

use crate::app::ports::{CharlieplexPort, StatusPort};
use crate::config::TagConfig;
use crate::display::multiplexer;
use crate::fsm::StateId;
use crate::fsm::context::StatusLines;
use crate::pattern::{Mode, PIXEL_COUNT, PatternEngine, VisiblePixel};
use crate::presence::PresenceProtocol;
use crate::scheduler::{TickTask, tasks_for};
use crate::timebase::TimeBase;

pub struct TagCore {
    time: TimeBase,
    engine: PatternEngine,
    presence: PresenceProtocol,
    /// Status changed outside a tock boundary; mirror it on the next tick.
    status_stale: bool,
}

impl TagCore {
    pub const fn new(config: &TagConfig) -> Self {
        Self {
            time: TimeBase::new(),
            engine: PatternEngine::new(config),
            presence: PresenceProtocol::new(config.watchdog_timeout_tocks),
            status_stale: false,
        }
    }

    /// Run the presence machine's entry action.  Call once before the tick
    /// timer starts.
    pub fn start(&mut self) {
        info!("tag core starting, mode {:?}", self.presence.mode());
        self.presence.start();
        self.status_stale = true;
    }

    /// One display tick: run this phase's tasks in table order, then move
    /// the time base on.
    pub fn on_tick(&mut self, hw: &mut (impl CharlieplexPort + StatusPort)) {
        if core::mem::take(&mut self.status_stale) {
            hw.set_status(self.presence.status());
        }
        let phase = self.time.phase();
        for task in tasks_for(phase) {
            self.run(task, phase, hw);
        }
        self.time.on_tick();
    }

    fn run(&mut self, task: TickTask, phase: u8, hw: &mut (impl CharlieplexPort + StatusPort)) {
        let mode = self.presence.mode();
        let e = &mut self.engine;
        match task {
            TickTask::Display => {
                multiplexer::drive(phase, e.pixels(), hw);
            }
            TickTask::ChaseCountdown(p) => e.chase_countdown(p as usize),
            TickTask::ChaseAdvance(p) => e.chase_advance(p as usize, mode),
            TickTask::ChaseReload(p) => e.chase_reload(p as usize),
            TickTask::RandomStep => e.random_step(),
            TickTask::RandomAccept(slot) => e.random_accept(slot as usize),
            TickTask::ColorCountdown => e.color_countdown(),
            TickTask::ColorAdvance => e.color_advance(),
            TickTask::ColorApply(p) => e.color_apply(p as usize),
            TickTask::TockBoundary => {
                self.presence.on_tock();
                hw.set_status(self.presence.status());
            }
        }
    }

    /// Report an IR edge seen by the main loop.
    pub fn on_ir_edge(&mut self) {
        self.presence.on_ir_edge();
        self.status_stale = true;
    }

    pub const fn tocks(&self) -> u16 {
        self.time.tocks()
    }

    pub const fn phase(&self) -> u8 {
        self.time.phase()
    }

    pub const fn mode(&self) -> Mode {
        self.presence.mode()
    }

    pub const fn state(&self) -> StateId {
        self.presence.state()
    }

    pub const fn status(&self) -> StatusLines {
        self.presence.status()
    }

    pub const fn watchdog(&self) -> u16 {
        self.presence.watchdog()
    }

    pub const fn pixels(&self) -> &[VisiblePixel; PIXEL_COUNT] {
        self.engine.pixels()
    }
}
