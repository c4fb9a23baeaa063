//! Peripheral drivers, hardware initialisation, and the display tick timer.

pub mod charlieplex;
pub mod gpio;
pub mod hw_init;
pub mod hw_timer;
pub mod ir;
pub mod status_lines;
