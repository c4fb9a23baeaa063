//! Packed 2-bit-per-channel colours and the shared colour wheel.

use crate::display::pin_image::Channel;

/// Six-bit colour: bits 0/1 red low/high, 2/3 green, 4/5 blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelColor(u8);

impl PixelColor {
    pub const RED: Self = Self(0x03);
    pub const GREEN: Self = Self(0x0c);
    pub const BLUE: Self = Self(0x30);

    /// Pack from raw bits; bits above 5 are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x3f)
    }

    /// Pack from per-channel levels `0..=3`.
    pub const fn from_levels(red: u8, green: u8, blue: u8) -> Self {
        Self((red & 3) | (green & 3) << 2 | (blue & 3) << 4)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Brightness `0..=3` of one channel.
    pub const fn level(self, channel: Channel) -> u8 {
        (self.0 >> (channel as u8 * 2)) & 3
    }

    /// Low (1/3 duty) bit of `channel`.
    pub const fn low_bit(self, channel: Channel) -> bool {
        self.0 & (1 << (channel as u8 * 2)) != 0
    }

    /// High (2/3 duty) bit of `channel`.
    pub const fn high_bit(self, channel: Channel) -> bool {
        self.0 & (2 << (channel as u8 * 2)) != 0
    }
}

/// Twelve-step hue wheel; the three pixels sit four steps apart.
pub const COLOR_WHEEL: [PixelColor; 12] = [
    PixelColor::RED,
    PixelColor(0x07),
    PixelColor(0x0a),
    PixelColor(0x0d),
    PixelColor::GREEN,
    PixelColor(0x1c),
    PixelColor(0x28),
    PixelColor(0x34),
    PixelColor::BLUE,
    PixelColor(0x31),
    PixelColor(0x22),
    PixelColor(0x13),
];

/// Wheel spacing between consecutive visible pixels.
pub const PIXEL_HUE_STEP: usize = 4;

/// Countdown and wheel index driving the shared colour rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCycle {
    count: u8,
    period: u8,
    index: u8,
}

impl ColorCycle {
    pub const fn new(period: u8) -> Self {
        Self {
            count: period,
            period,
            index: 0,
        }
    }

    /// Count one tock down.  Saturates at zero.
    pub fn countdown(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub const fn expired(&self) -> bool {
        self.count == 0
    }

    /// Reload the countdown and move one step round the wheel.
    pub fn advance(&mut self) {
        self.count = self.period;
        self.index = if self.index as usize >= COLOR_WHEEL.len() - 1 {
            0
        } else {
            self.index + 1
        };
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Colour of visible pixel `pixel` at the current wheel index.
    pub const fn color_for(&self, pixel: usize) -> PixelColor {
        COLOR_WHEEL[(self.index as usize + PIXEL_HUE_STEP * pixel) % COLOR_WHEEL.len()]
    }
}
