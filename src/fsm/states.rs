//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers, no closures, no dynamic
//! dispatch, no heap.
//!
//! ```text
//!            ┌────────[IR edge]────────┐
//!            │                         ▼
//!       LISTENING ◀──[watchdog ≥ T]── ALERTED ◀─┐
//!                                       │       │
//!                                       └[IR edge]
//! ```
//!
//! The IR edge path is driven from outside via
//! [`Fsm::force_transition`](super::Fsm::force_transition); the only
//! transition decided by `on_update` is the timeout.

use super::context::{PresenceContext, StatusLines};
use super::{StateDescriptor, StateId};
use log::trace;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.
pub const fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Listening
        StateDescriptor {
            id: StateId::Listening,
            name: "Listening",
            on_enter: Some(listening_enter),
            on_exit: None,
            on_update: listening_update,
        },
        // Index 1: Alerted
        StateDescriptor {
            id: StateId::Alerted,
            name: "Alerted",
            on_enter: Some(alerted_enter),
            on_exit: None,
            on_update: alerted_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  LISTENING state
// ═══════════════════════════════════════════════════════════════════════════

fn listening_enter(ctx: &mut PresenceContext) {
    ctx.status = StatusLines::CLEAR;
}

fn listening_update(_ctx: &mut PresenceContext) -> Option<StateId> {
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  ALERTED state
// ═══════════════════════════════════════════════════════════════════════════

fn alerted_enter(ctx: &mut PresenceContext) {
    trace!("alerted, watchdog at {}", ctx.watchdog);
}

fn alerted_update(ctx: &mut PresenceContext) -> Option<StateId> {
    ctx.timed_out().then_some(StateId::Listening)
}
