//! Presence protocol scenarios driven through the tick interrupt path.

use nametag::app::ports::PresenceLink;
use nametag::config::TagConfig;
use nametag::fsm::StateId;
use nametag::fsm::context::StatusLines;
use nametag::pattern::Mode;

use super::mock_hw::SimulatedTag;

const T: u16 = TagConfig::DEFAULT.watchdog_timeout_tocks;

const POWERED: StatusLines = StatusLines {
    watchdog_active: true,
    alerted: false,
};

#[test]
fn boots_chasing_then_settles_to_random() {
    let tag = SimulatedTag::new(&TagConfig::DEFAULT);
    assert_eq!(tag.state(), StateId::Alerted);
    assert_eq!(tag.mode(), Mode::Chaser);
    assert_eq!(tag.watchdog(), T);

    tag.advance_tocks(1);
    assert_eq!(tag.state(), StateId::Listening);
    assert_eq!(tag.mode(), Mode::Random);
    // Boot lines go out on the first tick, the settled ones at the tock.
    assert_eq!(tag.outputs.borrow().status, [POWERED, StatusLines::CLEAR]);
}

#[test]
fn edge_holds_alert_for_exactly_the_timeout() {
    let mut tag = SimulatedTag::new(&TagConfig::DEFAULT);
    tag.advance_tocks(1);

    assert_eq!(tag.edge(), 1);
    assert_eq!(tag.state(), StateId::Alerted);
    assert_eq!(tag.watchdog(), 0);
    assert!(tag.status().alerted);

    tag.advance_tocks(u32::from(T) - 1);
    assert_eq!(tag.state(), StateId::Alerted);
    assert_eq!(tag.mode(), Mode::Chaser);
    assert_eq!(
        tag.status(),
        StatusLines {
            watchdog_active: true,
            alerted: true
        }
    );

    tag.advance_tocks(1);
    assert_eq!(tag.state(), StateId::Listening);
    assert_eq!(tag.mode(), Mode::Random);
    assert_eq!(tag.status(), StatusLines::CLEAR);
    assert_eq!(tag.outputs.borrow().status.last(), Some(&StatusLines::CLEAR));
}

#[test]
fn repeated_edges_extend_the_alert() {
    let mut tag = SimulatedTag::new(&TagConfig::DEFAULT);
    tag.advance_tocks(1);
    tag.edge();
    tag.advance_tocks(4000);
    tag.edge();
    assert_eq!(tag.watchdog(), 0);

    // Past where the first edge alone would have expired.
    tag.advance_tocks(1000);
    assert_eq!(tag.state(), StateId::Alerted);
    tag.advance_tocks(u32::from(T) - 1000);
    assert_eq!(tag.state(), StateId::Listening);
}

#[test]
fn watchdog_line_drops_only_on_return_to_listening() {
    let mut tag = SimulatedTag::new(&TagConfig::DEFAULT);
    tag.advance_tocks(1);
    tag.edge();
    tag.advance_tocks(u32::from(T));

    let status = tag.outputs.borrow().status.clone();
    let t = T as usize;
    // Boot tick, boot tock, the tick after the edge, then one per tock.
    assert_eq!(status.len(), 3 + t);
    assert_eq!(
        status[2],
        StatusLines {
            watchdog_active: false,
            alerted: true
        }
    );
    assert!(status[3..t + 2].iter().all(|s| s.watchdog_active && s.alerted));
    assert_eq!(status[t + 2], StatusLines::CLEAR);
}

#[test]
fn alert_line_follows_edge_within_one_tick() {
    let mut tag = SimulatedTag::new(&TagConfig::DEFAULT);
    tag.advance_tocks(1);
    let before = tag.outputs.borrow().status.len();
    tag.edge();
    tag.tick();
    let status = tag.outputs.borrow().status.clone();
    assert_eq!(status.len(), before + 1);
    assert!(status[before].alerted);
}

#[test]
fn edge_while_alerted_keeps_state() {
    let mut tag = SimulatedTag::new(&TagConfig::DEFAULT);
    tag.edge();
    assert_eq!(tag.state(), StateId::Alerted);
    assert_eq!(tag.watchdog(), 0);
    tag.advance_tocks(1);
    assert_eq!(tag.state(), StateId::Alerted);
    assert_eq!(tag.watchdog(), 1);
}

#[test]
fn shorter_timeout_from_config() {
    let config = TagConfig {
        watchdog_timeout_tocks: 10,
        transmit_after_tocks: 5,
        ..TagConfig::DEFAULT
    };
    let mut tag = SimulatedTag::new(&config);
    tag.advance_tocks(1);
    tag.edge();
    tag.advance_tocks(9);
    assert_eq!(tag.state(), StateId::Alerted);
    tag.advance_tocks(1);
    assert_eq!(tag.state(), StateId::Listening);
}
