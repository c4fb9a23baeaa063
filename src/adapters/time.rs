//! Shared-core clock adapter.
//!
//! The main loop's time source is the tock counter inside the
//! interrupt-side [`TagCore`].  [`CoreClock`] reaches it through the
//! [`Guarded`] lock, one short critical section per call, and doubles as
//! the [`PresenceLink`] for IR edge reports.

use crate::app::ports::{PresenceLink, TockSource};
use crate::pattern::Mode;
use crate::shared::Guarded;
use crate::tag::TagCore;

#[derive(Clone, Copy)]
pub struct CoreClock<'a> {
    core: &'a Guarded<TagCore>,
}

impl<'a> CoreClock<'a> {
    pub const fn new(core: &'a Guarded<TagCore>) -> Self {
        Self { core }
    }
}

impl TockSource for CoreClock<'_> {
    fn tocks(&self) -> u16 {
        self.core.lock(|c| c.tocks())
    }
}

impl PresenceLink for CoreClock<'_> {
    fn report_ir_edge(&mut self) -> u16 {
        self.core.lock(|c| {
            c.on_ir_edge();
            c.tocks()
        })
    }

    fn mode(&self) -> Mode {
        self.core.lock(|c| c.mode())
    }
}
