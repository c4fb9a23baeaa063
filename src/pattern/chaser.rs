//! Per-pixel chase timing and ring stepping.

use crate::display::pin_image::RING_SIZE;

/// Rotation sense round the 24-position ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Next position one step in this direction, wrapping at the ends.
    pub const fn step(self, position: u8) -> u8 {
        match self {
            Self::Clockwise => {
                if position >= RING_SIZE - 1 {
                    0
                } else {
                    position + 1
                }
            }
            Self::CounterClockwise => {
                if position == 0 || position >= RING_SIZE {
                    RING_SIZE - 1
                } else {
                    position - 1
                }
            }
        }
    }
}

/// Directions of the three visible pixels: the middle one runs against
/// the other two.
pub const DIRECTIONS: [Direction; 3] = [
    Direction::Clockwise,
    Direction::CounterClockwise,
    Direction::Clockwise,
];

/// Countdown that fires once every `target` tocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChasePhase {
    count: u8,
    target: u8,
    direction: Direction,
}

impl ChasePhase {
    pub const fn new(target: u8, direction: Direction) -> Self {
        Self {
            count: target,
            target,
            direction,
        }
    }

    pub fn countdown(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub const fn expired(&self) -> bool {
        self.count == 0
    }

    /// Reload the countdown if it has run out.
    pub fn reload_if_expired(&mut self) {
        if self.expired() {
            self.count = self.target;
        }
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }
}
