//! Display output as seen on the charlieplex port.

use nametag::config::TagConfig;
use nametag::display::pin_image::{DRIVE_TABLE, RING_SIZE, encode};
use nametag::display::{Channel, DrivePattern, LedIndex};
use nametag::pattern::palette::COLOR_WHEEL;
use nametag::timebase::TICKS_PER_TOCK;

use super::mock_hw::SimulatedTag;

#[test]
fn one_drive_per_tick() {
    let tag = SimulatedTag::new(&TagConfig::DEFAULT);
    tag.advance_tocks(40);
    assert_eq!(tag.outputs.borrow().patterns.len(), 40 * TICKS_PER_TOCK as usize);
}

#[test]
fn boot_tock_lights_each_primary_three_times() {
    let tag = SimulatedTag::new(&TagConfig::DEFAULT);
    tag.advance_tocks(1);
    let tock = tag.patterns_of_tock(0);

    let red0 = encode(LedIndex::new(Channel::Red, 0));
    let green8 = encode(LedIndex::new(Channel::Green, 8));
    let blue16 = encode(LedIndex::new(Channel::Blue, 16));

    assert_eq!(tock.iter().filter(|p| !p.is_off()).count(), 9);
    assert_eq!(tock.iter().filter(|p| **p == red0).count(), 3);
    assert_eq!(tock.iter().filter(|p| **p == green8).count(), 3);
    assert_eq!(tock.iter().filter(|p| **p == blue16).count(), 3);

    // Low-bit phases come first, one per pixel channel.
    assert_eq!(tock[0], red0);
    assert_eq!(tock[1], DrivePattern::OFF);
    assert_eq!(tock[4], green8);
    assert_eq!(tock[8], blue16);
}

#[test]
fn every_lit_pattern_is_a_real_led() {
    let tag = SimulatedTag::new(&TagConfig::DEFAULT);
    tag.advance_tocks(600);
    let real = &DRIVE_TABLE[..LedIndex::NONE.raw() as usize];
    for (i, p) in tag.outputs.borrow().patterns.iter().enumerate() {
        if p.is_off() {
            continue;
        }
        assert_ne!(p.high(), p.low(), "tick {i}");
        assert!(real.contains(p), "tick {i}: {p:?} is not on the board");
    }
}

#[test]
fn pixels_stay_on_the_ring() {
    let mut tag = SimulatedTag::new(&TagConfig::DEFAULT);
    for round in 0..30 {
        tag.advance_tocks(97);
        if round % 3 == 0 {
            tag.edge();
        }
        for px in tag.pixels() {
            assert!(px.position < RING_SIZE, "round {round}: {px:?}");
        }
    }
}

#[test]
fn colour_wheel_steps_after_its_period() {
    let tag = SimulatedTag::new(&TagConfig::DEFAULT);
    let period = u32::from(TagConfig::DEFAULT.color_period);

    tag.advance_tocks(period - 1);
    assert_eq!(tag.pixels()[0].color, COLOR_WHEEL[0]);

    tag.advance_tocks(1);
    let px = tag.pixels();
    assert_eq!(px[0].color, COLOR_WHEEL[1]);
    assert_eq!(px[1].color, COLOR_WHEEL[5]);
    assert_eq!(px[2].color, COLOR_WHEEL[9]);
}

#[test]
fn chaser_moves_pixels_one_step_at_a_time() {
    let mut tag = SimulatedTag::new(&TagConfig::DEFAULT);
    // Hold the tag in Chaser for the whole run.
    tag.edge();
    let mut before = tag.pixels();
    for _ in 0..200 {
        tag.advance_tocks(1);
        let after = tag.pixels();
        for (b, a) in before.iter().zip(after.iter()) {
            let d = (a.position + RING_SIZE - b.position) % RING_SIZE;
            assert!(matches!(d, 0 | 1 | 23), "{b:?} -> {a:?}");
        }
        before = after;
    }
}
