//! Ticks, tocks and the main loop's relative waiter.
//!
//! One tick is one display-timer interrupt.  Twenty-seven ticks make a tock,
//! the unit every protocol timeout is counted in.  The tock counter is 16
//! bits and wraps silently, so all comparisons are done on wrapping
//! differences.

/// Display phases per tock.
pub const TICKS_PER_TOCK: u8 = 27;

/// Phase counter and tock counter advanced by the tick interrupt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBase {
    phase: u8,
    tocks: u16,
}

impl TimeBase {
    pub const fn new() -> Self {
        Self { phase: 0, tocks: 0 }
    }

    /// Advance one tick.  Returns `true` when the phase wrapped and a tock
    /// elapsed.
    pub fn on_tick(&mut self) -> bool {
        if self.phase >= TICKS_PER_TOCK - 1 {
            self.phase = 0;
            self.tocks = self.tocks.wrapping_add(1);
            true
        } else {
            self.phase += 1;
            false
        }
    }

    pub const fn phase(&self) -> u8 {
        self.phase
    }

    pub const fn tocks(&self) -> u16 {
        self.tocks
    }
}

impl Default for TimeBase {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Main-loop side
// ---------------------------------------------------------------------------

/// Anything that can report the current tock count.
pub trait TockSource {
    fn tocks(&self) -> u16;
}

/// Wraparound-safe "has `delta` elapsed since `anchor`".
#[inline]
pub const fn elapsed_at_least(now: u16, anchor: u16, delta: u16) -> bool {
    now.wrapping_sub(anchor) >= delta
}

/// Relative busy-waiter.  Each wait is measured from where the previous one
/// was *due* to end, not from when it was observed to end, so a late poll
/// never stretches the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TockWaiter {
    anchor: u16,
}

impl TockWaiter {
    pub const fn new(anchor: u16) -> Self {
        Self { anchor }
    }

    pub const fn anchor(&self) -> u16 {
        self.anchor
    }

    /// Spin until `delta` tocks past the anchor, calling `poll` between
    /// clock reads.  Returns the tock value that satisfied the wait.
    pub fn wait_until<H: TockSource>(
        &mut self,
        delta: u16,
        hw: &mut H,
        poll: impl FnMut(&mut H),
    ) -> u16 {
        self.wait_until_by(delta, hw, elapsed_at_least, poll)
    }

    /// [`wait_until`](Self::wait_until) with the comparison injected.
    /// `reached(now, anchor, delta)` decides when the wait is over.
    pub fn wait_until_by<H: TockSource>(
        &mut self,
        delta: u16,
        hw: &mut H,
        reached: fn(u16, u16, u16) -> bool,
        mut poll: impl FnMut(&mut H),
    ) -> u16 {
        loop {
            let now = hw.tocks();
            if reached(now, self.anchor, delta) {
                self.anchor = self.anchor.wrapping_add(delta);
                return now;
            }
            poll(hw);
        }
    }
}
