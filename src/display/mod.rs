//! Charlieplexed LED ring output.
//!
//! [`pin_image`] maps a component LED onto the tri-state image of the nine
//! ring lines; [`multiplexer`] decides which component LED a display phase
//! shows.

pub mod multiplexer;
pub mod pin_image;

pub use pin_image::{Channel, DrivePattern, LedIndex};
