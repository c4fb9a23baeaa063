//! IR presence protocol: watchdog plus the Listening/Alerted machine.
//!
//! The watchdog counts tocks since the last IR edge.  Hearing another tag
//! zeroes it and forces Alerted; once it reaches its timeout the tag falls
//! back to Listening.  The current state chooses the pattern mode.

use crate::fsm::context::{PresenceContext, StatusLines};
use crate::fsm::{Fsm, StateId, states};
use crate::pattern::Mode;

pub struct PresenceProtocol {
    fsm: Fsm,
    ctx: PresenceContext,
}

impl PresenceProtocol {
    /// Boot state: Alerted with the watchdog already expired, so the first
    /// tock drops to Listening.
    pub const fn new(timeout: u16) -> Self {
        Self {
            fsm: Fsm::new(states::build_state_table(), StateId::Alerted),
            ctx: PresenceContext::new(timeout),
        }
    }

    /// Run the initial state's entry action.
    pub fn start(&mut self) {
        self.fsm.start(&mut self.ctx);
    }

    /// Tock boundary: count the watchdog and let the FSM react.
    pub fn on_tock(&mut self) {
        let ctx = &mut self.ctx;
        ctx.watchdog = ctx.watchdog.saturating_add(1).min(ctx.timeout);
        if !ctx.timed_out() {
            ctx.status.watchdog_active = true;
        }
        self.fsm.tick(&mut self.ctx);
    }

    /// Another tag's carrier was seen.
    pub fn on_ir_edge(&mut self) {
        self.ctx.watchdog = 0;
        self.ctx.status.alerted = true;
        self.fsm.force_transition(StateId::Alerted, &mut self.ctx);
    }

    pub const fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    pub const fn mode(&self) -> Mode {
        match self.state() {
            StateId::Listening => Mode::Random,
            StateId::Alerted => Mode::Chaser,
        }
    }

    pub const fn status(&self) -> StatusLines {
        self.ctx.status
    }

    pub const fn watchdog(&self) -> u16 {
        self.ctx.watchdog
    }
}
