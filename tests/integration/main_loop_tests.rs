//! TagService integration tests: transmit/listen cycle against the
//! simulated tag.

use nametag::app::events::AppEvent;
use nametag::app::service::TagService;
use nametag::config::TagConfig;
use nametag::fsm::StateId;
use nametag::pattern::Mode;

use super::mock_hw::{CarrierCall, RecordingSink, SimulatedTag};

fn setup() -> (SimulatedTag, RecordingSink, TagService) {
    let tag = SimulatedTag::new(&TagConfig::DEFAULT);
    let svc = TagService::new(&TagConfig::DEFAULT, &tag);
    (tag, RecordingSink::new(), svc)
}

#[test]
fn start_reports_the_settled_mode() {
    let (_tag, mut sink, mut svc) = setup();
    svc.start(&mut sink);
    // Building the service read the clock once, which let the boot tock run.
    assert_eq!(
        sink.events,
        [AppEvent::Started {
            tock: 0,
            mode: Mode::Random
        }]
    );
}

#[test]
fn quiet_cycle_timing() {
    let (mut tag, mut sink, mut svc) = setup();
    svc.run_cycle(&mut tag, &mut sink);

    assert_eq!(
        sink.events,
        [
            AppEvent::TransmitStarted { tock: 4074 },
            AppEvent::TransmitFinished { tock: 4076 },
            AppEvent::ListeningResumed { tock: 4078 },
        ]
    );
    assert_eq!(
        tag.carrier,
        [
            CarrierCall::Start {
                hz: 38_000,
                tock: 4075
            },
            CarrierCall::Stop { tock: 4077 },
            CarrierCall::ForceLow { tock: 4077 },
        ]
    );
    assert_eq!(tag.edges_reported, 0);
    assert_eq!(tag.state(), StateId::Listening);
}

#[test]
fn cycles_do_not_drift() {
    let (mut tag, mut sink, mut svc) = setup();
    for _ in 0..3 {
        svc.run_cycle(&mut tag, &mut sink);
    }
    let starts: Vec<u16> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::TransmitStarted { tock } => Some(*tock),
            _ => None,
        })
        .collect();
    assert_eq!(starts, [4074, 4074 + 4078, 4074 + 2 * 4078]);
    assert_eq!(svc.cycles(), 3);
    assert_eq!(svc.anchor(), 3 * 4078);
}

#[test]
fn received_burst_alerts_until_timeout() {
    let (mut tag, mut sink, mut svc) = setup();
    tag.ir_windows.push(1000..1003);

    svc.run_cycle(&mut tag, &mut sink);
    assert_eq!(tag.edges_reported, 3);
    assert_eq!(tag.state(), StateId::Alerted);
    let detected: Vec<_> = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::PresenceDetected { .. }))
        .collect();
    assert_eq!(detected, [&AppEvent::PresenceDetected { tock: 1000 }]);

    // Last edge at 1002; the alert lapses at 1002 + 4444, inside the next
    // listen window, and the loop notices when that window closes.
    svc.run_cycle(&mut tag, &mut sink);
    assert_eq!(tag.state(), StateId::Listening);
    assert_eq!(
        sink.mode_changes(),
        [
            AppEvent::ModeChanged {
                from: Mode::Random,
                to: Mode::Chaser,
                tock: 1000
            },
            AppEvent::ModeChanged {
                from: Mode::Chaser,
                to: Mode::Random,
                tock: 4078 + 4074
            },
        ]
    );
}

#[test]
fn receiver_ignored_during_burst_and_deaf_time() {
    let (mut tag, mut sink, mut svc) = setup();
    // Our own echo: asserted only while transmitting and just after.
    tag.ir_windows.push(4075..4079);

    svc.run_cycle(&mut tag, &mut sink);
    assert_eq!(tag.edges_reported, 0);
    assert!(sink.mode_changes().is_empty());
    assert_eq!(tag.state(), StateId::Listening);
}

#[test]
fn continuous_neighbour_keeps_tag_alerted() {
    let (mut tag, mut sink, mut svc) = setup();
    tag.ir_windows.push(10..60_000);

    for _ in 0..3 {
        svc.run_cycle(&mut tag, &mut sink);
        assert_eq!(tag.state(), StateId::Alerted);
    }
    let detected = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::PresenceDetected { .. }))
        .count();
    // One rising edge per listen window: the deaf time resets edge tracking.
    assert_eq!(detected, 3);
}
