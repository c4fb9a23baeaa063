//! Fuzz target: `TagConfig` JSON decoding and validation
//!
//! Decodes arbitrary bytes as a JSON config and verifies:
//! - No panics in decoding or `validate`
//! - A config that validates can build a `TagCore` and run a tock
//! - Tock/millisecond conversions never panic
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use nametag::app::ports::{CharlieplexPort, StatusPort};
use nametag::config::TagConfig;
use nametag::display::DrivePattern;
use nametag::fsm::context::StatusLines;
use nametag::tag::TagCore;

struct NullOutputs;

impl CharlieplexPort for NullOutputs {
    fn drive(&mut self, _pattern: DrivePattern) {}
}

impl StatusPort for NullOutputs {
    fn set_status(&mut self, _lines: StatusLines) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<TagConfig>(data) else {
        return;
    };
    let _ = config.tocks_to_ms(config.watchdog_timeout_tocks);
    if config.validate().is_err() {
        return;
    }

    let mut core = TagCore::new(&config);
    core.start();
    for _ in 0..27 {
        core.on_tick(&mut NullOutputs);
    }
    assert_eq!(core.tocks(), 1);
});
