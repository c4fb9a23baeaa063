//! Pattern engine: position and colour of the three visible pixels.
//!
//! The engine does no scheduling of its own.  Each method is one small
//! slice of per-tock work, and [`crate::scheduler::PHASE_TABLE`] spreads
//! those slices over the 27 ticks of a tock so no tick does much more than
//! any other:
//!
//! ```text
//!  phase  0  1  2 | 3  4  5 | 6  7  8 | 9 10 .. 19 20 | 21 22 | 23 24 25 | 26
//!         chase p0| chase p1| chase p2| rng step/draw | colour| apply    | tock
//! ```
//!
//! Two behaviours share the state:
//!
//! * **Chaser**: each pixel steps one position when its countdown expires,
//!   pixel 1 counter-clockwise and the others clockwise.
//! * **Random**: on expiry a pixel jumps to the pending position drawn for
//!   it by the xorshift generator.
//!
//! Colour rotation runs identically in both.

pub mod chaser;
pub mod palette;
pub mod rng;

use crate::config::TagConfig;
use chaser::{ChasePhase, DIRECTIONS};
use palette::{ColorCycle, PixelColor};
use rng::Xorshift16;

/// Number of visible pixels.
pub const PIXEL_COUNT: usize = 3;

/// Which behaviour moves the pixels on chase expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Random,
    Chaser,
}

/// One of the three lit ring positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisiblePixel {
    /// Ring position `0..24`.
    pub position: u8,
    pub color: PixelColor,
}

#[derive(Debug, Clone)]
pub struct PatternEngine {
    pixels: [VisiblePixel; PIXEL_COUNT],
    chase: [ChasePhase; PIXEL_COUNT],
    rng: Xorshift16,
    colors: ColorCycle,
}

impl PatternEngine {
    pub const fn new(config: &TagConfig) -> Self {
        let colors = ColorCycle::new(config.color_period);
        let [p0, p1, p2] = config.start_positions;
        let [c0, c1, c2] = config.chase_periods;
        Self {
            pixels: [
                VisiblePixel {
                    position: p0,
                    color: colors.color_for(0),
                },
                VisiblePixel {
                    position: p1,
                    color: colors.color_for(1),
                },
                VisiblePixel {
                    position: p2,
                    color: colors.color_for(2),
                },
            ],
            chase: [
                ChasePhase::new(c0, DIRECTIONS[0]),
                ChasePhase::new(c1, DIRECTIONS[1]),
                ChasePhase::new(c2, DIRECTIONS[2]),
            ],
            rng: Xorshift16::new(config.random_seed),
            colors,
        }
    }

    // ── Chase ────────────────────────────────────────────────────

    pub fn chase_countdown(&mut self, pixel: usize) {
        self.chase[pixel].countdown();
    }

    /// Move `pixel` if its countdown has expired.
    pub fn chase_advance(&mut self, pixel: usize, mode: Mode) {
        let chase = &self.chase[pixel];
        if !chase.expired() {
            return;
        }
        let px = &mut self.pixels[pixel];
        px.position = match mode {
            Mode::Chaser => chase.direction().step(px.position),
            Mode::Random => self.rng.pending(pixel),
        };
    }

    pub fn chase_reload(&mut self, pixel: usize) {
        self.chase[pixel].reload_if_expired();
    }

    // ── Random ───────────────────────────────────────────────────

    pub fn random_step(&mut self) {
        self.rng.step();
    }

    pub fn random_accept(&mut self, slot: usize) {
        self.rng.accept(slot);
    }

    // ── Colour ───────────────────────────────────────────────────

    pub fn color_countdown(&mut self) {
        self.colors.countdown();
    }

    /// Reload and step the wheel if the colour countdown has expired.
    pub fn color_advance(&mut self) {
        if self.colors.expired() {
            self.colors.advance();
        }
    }

    pub fn color_apply(&mut self, pixel: usize) {
        self.pixels[pixel].color = self.colors.color_for(pixel);
    }

    // ── Queries ──────────────────────────────────────────────────

    pub const fn pixels(&self) -> &[VisiblePixel; PIXEL_COUNT] {
        &self.pixels
    }

    pub const fn wheel_index(&self) -> u8 {
        self.colors.index()
    }

    pub fn pending_position(&self, slot: usize) -> u8 {
        self.rng.pending(slot)
    }
}
