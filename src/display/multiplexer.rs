//! One-LED-at-a-time multiplexer.
//!
//! A tock is 27 display phases.  Each phase shows one colour channel of one
//! visible pixel:
//!
//! ```text
//!  phase   0 1 2 | 3 4 5 | 6 7 8 | 9 .. 17 | 18 .. 26
//!  pixel   0 0 0 | 1 1 1 | 2 2 2 | 0..2    | 0..2
//!  chan    R G B | R G B | R G B | R G B.. | R G B..
//!  bit     low            | high          | high
//! ```
//!
//! The low bit of a channel gets one phase and the high bit two, so a
//! channel's four brightness levels map to 0, 1, 2 and 3 lit phases per
//! tock.

use super::pin_image::{self, Channel, LedIndex};
use crate::app::ports::CharlieplexPort;
use crate::pattern::{PIXEL_COUNT, VisiblePixel};
use crate::timebase::TICKS_PER_TOCK;

/// What one display phase shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSlot {
    pub pixel: u8,
    pub channel: Channel,
    /// `true` for the 2/3-weight bit, `false` for the 1/3-weight bit.
    pub high_bit: bool,
}

/// Slot for every phase, precomputed so each tick costs the same.
pub const PHASE_PLAN: [PhaseSlot; TICKS_PER_TOCK as usize] = build_plan();

const LOW_PHASES: u8 = 9;

const fn build_plan() -> [PhaseSlot; TICKS_PER_TOCK as usize] {
    let mut plan = [PhaseSlot {
        pixel: 0,
        channel: Channel::Red,
        high_bit: false,
    }; TICKS_PER_TOCK as usize];
    let mut phase = 0;
    while phase < TICKS_PER_TOCK {
        let (k, high_bit) = if phase < LOW_PHASES {
            (phase, false)
        } else {
            ((phase - LOW_PHASES) % 9, true)
        };
        plan[phase as usize] = PhaseSlot {
            pixel: k / 3,
            channel: Channel::from_index(k % 3),
            high_bit,
        };
        phase += 1;
    }
    plan
}

/// Component LED lit during `phase`, or [`LedIndex::NONE`] when the
/// selected colour bit is clear.
pub fn select(phase: u8, pixels: &[VisiblePixel; PIXEL_COUNT]) -> LedIndex {
    let Some(slot) = PHASE_PLAN.get(phase as usize) else {
        return LedIndex::NONE;
    };
    let px = pixels[slot.pixel as usize];
    let lit = if slot.high_bit {
        px.color.high_bit(slot.channel)
    } else {
        px.color.low_bit(slot.channel)
    };
    if lit {
        LedIndex::new(slot.channel, px.position)
    } else {
        LedIndex::NONE
    }
}

/// Select and push the drive pattern for `phase`.  Returns the LED lit.
pub fn drive(
    phase: u8,
    pixels: &[VisiblePixel; PIXEL_COUNT],
    port: &mut impl CharlieplexPort,
) -> LedIndex {
    let led = select(phase, pixels);
    port.drive(pin_image::encode(led));
    led
}
