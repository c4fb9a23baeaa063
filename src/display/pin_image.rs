//! Component-LED → charlieplex drive pattern lookup.
//!
//! Each of the 72 component LEDs (24 ring positions × R/G/B) lights when one
//! specific line is driven HIGH and another LOW, with the remaining seven
//! lines left floating.  The board design supplies that pairing as one byte
//! per LED: high nibble = line driven HIGH, low nibble = line driven LOW
//! (codes as in [`LedPin::from_code`]).
//!
//! ```text
//!  pos  RED    GREEN  BLUE       pos  RED    GREEN  BLUE
//!  L00  B4-B1  B3-B1  B5-B1      L12  A7-A0  B7-A0  B1-B0
//!  L01  B1-B4  B1-B5  B1-B3      L13  A0-A7  B0-B1  A0-B7
//!  L02  B7-B0  B6-B0  A7-B0      L14  B5-A0  B4-A0  B6-A0
//!  L03  B0-B7  B0-A7  B0-B6      L15  A0-B5  A0-B6  A0-B4
//!  L04  B4-B0  B3-B0  B5-B0      L16  B1-A0  B0-A0  B3-A0
//!  L05  B0-B4  B0-B5  B0-B3      L17  A0-B1  A0-B3  A0-B0
//!  L06  B7-B1  B6-B1  A7-B1      L18  B7-B4  B6-B4  A7-B4
//!  L07  B1-B7  B1-A7  B1-B6      L19  B4-B7  B4-A7  B4-B6
//!  L08  B5-B3  B4-B3  B6-B3      L20  B7-B5  B6-B5  A7-B5
//!  L09  B3-B5  B3-B6  B3-B4      L21  B5-B7  B5-A7  B5-B6
//!  L10  A7-B3  B7-B3  B5-B4      L22  A7-B6  B7-B6  A7-B7
//!  L11  B3-A7  B4-B5  B3-B7      L23  B6-A7  B7-A7  B6-B7
//! ```
//!
//! The raw bytes are decoded once, at compile time, into [`DRIVE_TABLE`] so
//! the per-tick lookup is a single indexed load.

use crate::pins::LedPin;

/// Number of ring positions.
pub const RING_SIZE: u8 = 24;

/// Colour channel of a component LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Channel by index `0..3`; anything else is treated as blue.
    pub const fn from_index(idx: u8) -> Self {
        match idx {
            0 => Self::Red,
            1 => Self::Green,
            _ => Self::Blue,
        }
    }
}

/// Index of one component LED: `0..24` red, `24..48` green, `48..72` blue,
/// `72` for "nothing lit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LedIndex(u8);

impl LedIndex {
    /// Sentinel: no component LED.
    pub const NONE: Self = Self(72);
    /// Table length including the sentinel.
    pub const COUNT: usize = 73;

    /// Component LED for `channel` at ring `position` (taken modulo the ring).
    pub const fn new(channel: Channel, position: u8) -> Self {
        Self(channel as u8 * RING_SIZE + position % RING_SIZE)
    }

    /// Wrap a raw table index.  Values above 72 collapse to [`Self::NONE`].
    pub const fn from_raw(raw: u8) -> Self {
        if raw > 72 { Self::NONE } else { Self(raw) }
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// Channel and ring position, or `None` for the sentinel.
    pub const fn split(self) -> Option<(Channel, u8)> {
        if self.is_none() {
            None
        } else {
            Some((Channel::from_index(self.0 / RING_SIZE), self.0 % RING_SIZE))
        }
    }
}

/// Tri-state image for the nine charlieplex lines: at most one line HIGH,
/// at most one line LOW, every other line high-impedance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrivePattern {
    high: Option<LedPin>,
    low: Option<LedPin>,
}

impl DrivePattern {
    /// All lines floating.
    pub const OFF: Self = Self { high: None, low: None };

    /// Build a pattern; an illegal pairing (missing side or same line
    /// twice) collapses to [`Self::OFF`].
    pub const fn new(high: Option<LedPin>, low: Option<LedPin>) -> Self {
        match (high, low) {
            (Some(h), Some(l)) if h as u8 != l as u8 => Self {
                high: Some(h),
                low: Some(l),
            },
            _ => Self::OFF,
        }
    }

    /// Decode one raw table byte.
    pub const fn from_raw(byte: u8) -> Self {
        Self::new(LedPin::from_code(byte >> 4), LedPin::from_code(byte & 0x0f))
    }

    pub const fn high(&self) -> Option<LedPin> {
        self.high
    }

    pub const fn low(&self) -> Option<LedPin> {
        self.low
    }

    pub const fn is_off(&self) -> bool {
        self.high.is_none()
    }
}

/// Raw pin-pair bytes: 24 red, 24 green, 24 blue, then the "no LED" entry.
pub const PIN_PAIRS: [u8; LedIndex::COUNT] = [
    0x42, 0x24, 0x71, 0x17, 0x41, 0x14, 0x72, 0x27, 0x53, 0x35, 0x93, 0x39, //
    0x98, 0x89, 0x58, 0x85, 0x28, 0x82, 0x74, 0x47, 0x75, 0x57, 0x96, 0x69, //
    0x32, 0x25, 0x61, 0x19, 0x31, 0x15, 0x62, 0x29, 0x43, 0x36, 0x73, 0x45, //
    0x78, 0x12, 0x48, 0x86, 0x18, 0x83, 0x64, 0x49, 0x65, 0x59, 0x76, 0x79, //
    0x52, 0x23, 0x91, 0x16, 0x51, 0x13, 0x92, 0x26, 0x63, 0x34, 0x54, 0x37, //
    0x21, 0x87, 0x68, 0x84, 0x38, 0x81, 0x94, 0x46, 0x95, 0x56, 0x97, 0x67, //
    0x00,
];

/// [`PIN_PAIRS`] decoded into drive patterns.
pub const DRIVE_TABLE: [DrivePattern; LedIndex::COUNT] = decode_table();

const fn decode_table() -> [DrivePattern; LedIndex::COUNT] {
    let mut table = [DrivePattern::OFF; LedIndex::COUNT];
    let mut i = 0;
    while i < LedIndex::COUNT {
        table[i] = DrivePattern::from_raw(PIN_PAIRS[i]);
        i += 1;
    }
    table
}

/// Drive pattern that lights `led` (all-floating for the sentinel).
#[inline]
pub fn encode(led: LedIndex) -> DrivePattern {
    DRIVE_TABLE[led.raw() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_all_floating() {
        assert_eq!(encode(LedIndex::NONE), DrivePattern::OFF);
        assert!(encode(LedIndex::NONE).is_off());
    }

    #[test]
    fn every_real_led_drives_exactly_two_distinct_lines() {
        for raw in 0..72u8 {
            let p = encode(LedIndex::from_raw(raw));
            let (h, l) = (p.high().unwrap(), p.low().unwrap());
            assert_ne!(h, l, "LED {raw} drives the same line both ways");
        }
    }

    #[test]
    fn known_entries_match_board_table() {
        // L00 red: B4 high, B1 low.
        let p = encode(LedIndex::new(Channel::Red, 0));
        assert_eq!((p.high(), p.low()), (Some(LedPin::B4), Some(LedPin::B1)));
        // L12 red: A7 high, A0 low.
        let p = encode(LedIndex::new(Channel::Red, 12));
        assert_eq!((p.high(), p.low()), (Some(LedPin::A7), Some(LedPin::A0)));
        // L23 blue: B6 high, B7 low.
        let p = encode(LedIndex::new(Channel::Blue, 23));
        assert_eq!((p.high(), p.low()), (Some(LedPin::B6), Some(LedPin::B7)));
    }

    #[test]
    fn every_led_has_a_unique_pairing() {
        let mut seen = std::collections::HashSet::new();
        for raw in 0..72u8 {
            assert!(seen.insert(encode(LedIndex::from_raw(raw))));
        }
    }

    #[test]
    fn illegal_bytes_collapse_to_off() {
        assert_eq!(DrivePattern::from_raw(0x44), DrivePattern::OFF);
        assert_eq!(DrivePattern::from_raw(0x40), DrivePattern::OFF);
        assert_eq!(DrivePattern::from_raw(0x04), DrivePattern::OFF);
        assert_eq!(DrivePattern::from_raw(0xa1), DrivePattern::OFF);
    }

    #[test]
    fn index_split_recovers_channel_and_position() {
        for ch in Channel::ALL {
            for pos in 0..RING_SIZE {
                assert_eq!(LedIndex::new(ch, pos).split(), Some((ch, pos)));
            }
        }
        assert_eq!(LedIndex::NONE.split(), None);
        assert_eq!(LedIndex::from_raw(200), LedIndex::NONE);
    }
}
