//! 16-bit xorshift generator feeding Random mode.
//!
//! The generator is stepped on six fixed phases of every tock and each step
//! is followed by an accept-or-reject draw into one of three pending ring
//! positions.  A draw whose bits 3 and 4 are both set would land on 24..31,
//! off the ring, so it is dropped and the slot keeps its previous value.

/// Bits that, when both set, push a 5-bit draw past the last ring position.
const REJECT_MASK: u16 = 0x18;
const POSITION_MASK: u16 = 0x1f;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift16 {
    state: u16,
    pending: [u8; 3],
}

impl Xorshift16 {
    pub const fn new(seed: u16) -> Self {
        Self {
            state: seed,
            pending: [0; 3],
        }
    }

    /// Advance the generator one step.  A zero state is bumped to one first
    /// so the sequence can never lock up.
    pub fn step(&mut self) -> u16 {
        if self.state == 0 {
            self.state = 1;
        }
        self.state ^= self.state << 13;
        self.state ^= self.state >> 9;
        self.state ^= self.state << 7;
        self.state
    }

    /// Offer the current state to pending `slot`.  Returns whether it was
    /// taken.
    pub fn accept(&mut self, slot: usize) -> bool {
        match draw(self.state) {
            Some(pos) => {
                self.pending[slot % 3] = pos;
                true
            }
            None => false,
        }
    }

    /// Pending position for visible pixel `slot`.
    pub fn pending(&self, slot: usize) -> u8 {
        self.pending[slot % 3]
    }

    pub const fn state(&self) -> u16 {
        self.state
    }
}

/// Ring position encoded by `state`, or `None` when the draw is off-ring.
pub const fn draw(state: u16) -> Option<u8> {
    if state & REJECT_MASK == REJECT_MASK {
        None
    } else {
        Some((state & POSITION_MASK) as u8)
    }
}
