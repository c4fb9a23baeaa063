//! Fuzz target: `TagCore` tick and IR-edge sequences
//!
//! Each input byte is either an IR edge (top bit set) or a run of up to
//! 127 ticks.  After every step:
//! - every drive pattern is all-floating or one high plus one distinct low
//! - visible pixels stay on the 24-position ring
//! - the watchdog never exceeds its timeout
//! - the pattern mode agrees with the presence state
//!
//! cargo fuzz run fuzz_tag_core

#![no_main]

use libfuzzer_sys::fuzz_target;
use nametag::app::ports::{CharlieplexPort, StatusPort};
use nametag::config::TagConfig;
use nametag::display::DrivePattern;
use nametag::display::pin_image::RING_SIZE;
use nametag::fsm::StateId;
use nametag::fsm::context::StatusLines;
use nametag::pattern::Mode;
use nametag::tag::TagCore;

struct CheckedOutputs;

impl CharlieplexPort for CheckedOutputs {
    fn drive(&mut self, pattern: DrivePattern) {
        match (pattern.high(), pattern.low()) {
            (None, None) => {}
            (Some(h), Some(l)) => assert_ne!(h, l, "line driven both ways"),
            other => panic!("half-driven pattern {other:?}"),
        }
    }
}

impl StatusPort for CheckedOutputs {
    fn set_status(&mut self, _lines: StatusLines) {}
}

fuzz_target!(|data: &[u8]| {
    let config = TagConfig {
        watchdog_timeout_tocks: 40,
        ..TagConfig::DEFAULT
    };
    let mut core = TagCore::new(&config);
    core.start();
    let mut out = CheckedOutputs;

    for &b in data {
        if b & 0x80 != 0 {
            core.on_ir_edge();
        } else {
            for _ in 0..b {
                core.on_tick(&mut out);
            }
        }

        assert!(core.watchdog() <= config.watchdog_timeout_tocks);
        assert!(core.pixels().iter().all(|px| px.position < RING_SIZE));
        let expected = match core.state() {
            StateId::Listening => Mode::Random,
            StateId::Alerted => Mode::Chaser,
        };
        assert_eq!(core.mode(), expected);
    }
});
