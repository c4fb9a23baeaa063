//! GPIO / peripheral pin assignments for the name-tag board.
//!
//! Every driver references this module rather than hard-coding pin numbers.
//!
//! The LED ring is wired to nine charlieplex lines.  They keep the names of
//! the first board revision (`B0`..`B7`, `A0`, `A7`) because the
//! component-LED table in [`crate::display::pin_image`] is written in those
//! terms; [`LedPin::gpio`] maps each line onto the ESP32-S3 pad it is routed to.

// ---------------------------------------------------------------------------
// Charlieplex lines
// ---------------------------------------------------------------------------

/// One of the nine tri-state lines that drive the LED ring.
///
/// The discriminant is the 4-bit code used in the pin-pair table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LedPin {
    B0 = 1,
    B1 = 2,
    B3 = 3,
    B4 = 4,
    B5 = 5,
    B6 = 6,
    B7 = 7,
    A0 = 8,
    A7 = 9,
}

impl LedPin {
    /// Number of charlieplex lines.
    pub const COUNT: usize = 9;

    /// Every line, in code order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::B0,
        Self::B1,
        Self::B3,
        Self::B4,
        Self::B5,
        Self::B6,
        Self::B7,
        Self::A0,
        Self::A7,
    ];

    /// Decode a 4-bit table code.  `0` and anything above `9` mean "no pin".
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::B0),
            2 => Some(Self::B1),
            3 => Some(Self::B3),
            4 => Some(Self::B4),
            5 => Some(Self::B5),
            6 => Some(Self::B6),
            7 => Some(Self::B7),
            8 => Some(Self::A0),
            9 => Some(Self::A7),
            _ => None,
        }
    }

    /// The 4-bit table code for this line.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// ESP32-S3 GPIO number this line is routed to.
    pub const fn gpio(self) -> i32 {
        match self {
            Self::B0 => LED_B0_GPIO,
            Self::B1 => LED_B1_GPIO,
            Self::B3 => LED_B3_GPIO,
            Self::B4 => LED_B4_GPIO,
            Self::B5 => LED_B5_GPIO,
            Self::B6 => LED_B6_GPIO,
            Self::B7 => LED_B7_GPIO,
            Self::A0 => LED_A0_GPIO,
            Self::A7 => LED_A7_GPIO,
        }
    }
}

pub const LED_B0_GPIO: i32 = 4;
pub const LED_B1_GPIO: i32 = 5;
pub const LED_B3_GPIO: i32 = 6;
pub const LED_B4_GPIO: i32 = 7;
pub const LED_B5_GPIO: i32 = 15;
pub const LED_B6_GPIO: i32 = 16;
pub const LED_B7_GPIO: i32 = 17;
pub const LED_A0_GPIO: i32 = 18;
pub const LED_A7_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Infrared link
// ---------------------------------------------------------------------------

/// IR LED (active HIGH).  Driven by an LEDC channel while transmitting and
/// forced LOW as plain GPIO afterwards.
pub const IR_TX_GPIO: i32 = 38;
/// Demodulating IR receiver output.  LOW while another tag's carrier is seen.
pub const IR_RX_GPIO: i32 = 39;

/// LEDC channel / timer pair reserved for the IR carrier.
pub const LEDC_CH_IR: u32 = 0;
pub const LEDC_TIMER_IR: u32 = 0;

// ---------------------------------------------------------------------------
// Status / debug header
// ---------------------------------------------------------------------------

/// HIGH while the presence watchdog is counting ("powered / alive").
pub const STATUS_WATCHDOG_GPIO: i32 = 40;
/// HIGH after an IR edge until the watchdog times out.
pub const STATUS_ALERT_GPIO: i32 = 41;
