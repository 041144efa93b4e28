//! Interlock → relay bank, driven through the application service.

use gatekeeper::app::commands::GateCommand;
use gatekeeper::app::events::AppEvent;
use gatekeeper::config::GateConfig;
use gatekeeper::drivers::relay::RelayChannel;
use gatekeeper::interlock::{ActuationRequest, PulseOutcome, SuppressReason};

use crate::mock_hw::{Line, Rig};

const ALL_SENSOR_STATES: [(bool, bool); 4] = [(false, false), (true, false), (false, true), (true, true)];

/// Queue-free dispatch of one actuation; the outcome is read back from the
/// event the service emitted for it.
fn request(rig: &mut Rig, req: ActuationRequest) -> PulseOutcome {
    let before = rig.sink.events.len();
    rig.app.handle_command(GateCommand::Actuate(req), &mut rig.sink);
    assert_eq!(rig.sink.events.len(), before + 1, "one event per actuation");
    match rig.sink.events[before] {
        AppEvent::Pulsed(channel) => {
            assert_eq!(channel, req.channel());
            PulseOutcome::Fired
        }
        AppEvent::Suppressed { request, reason } => {
            assert_eq!(request, req);
            PulseOutcome::SuppressedBySafety(reason)
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn boot_leaves_every_relay_idle() {
    let rig = Rig::new();
    for line in [Line::Open, Line::Close, Line::Stop] {
        assert_eq!(rig.writes_to(line), vec![true], "{line:?}");
    }
}

#[test]
fn closed_at_rest_scenario() {
    let mut rig = Rig::new();
    rig.set_sensors(false, true);
    rig.clear();

    let out = request(&mut rig, ActuationRequest::Close);
    assert_eq!(out, PulseOutcome::SuppressedBySafety(SuppressReason::AlreadyClosed));
    assert!(rig.trace.borrow().is_empty(), "no line may be written");
    assert!(rig.holds.borrow().is_empty());

    let out = request(&mut rig, ActuationRequest::Open);
    assert_eq!(out, PulseOutcome::Fired);
    assert_eq!(rig.writes_to(Line::Open), vec![false, true]);
    assert_eq!(*rig.holds.borrow(), vec![500]);

    assert_eq!(
        rig.sink.events,
        vec![
            AppEvent::Suppressed {
                request: ActuationRequest::Close,
                reason: SuppressReason::AlreadyClosed,
            },
            AppEvent::Pulsed(RelayChannel::Open),
        ]
    );
}

#[test]
fn open_at_rest_blocks_open() {
    let mut rig = Rig::new();
    rig.set_sensors(true, false);
    rig.clear();

    let out = request(&mut rig, ActuationRequest::Open);
    assert_eq!(out, PulseOutcome::SuppressedBySafety(SuppressReason::AlreadyOpen));
    assert!(!rig.ever_energised(Line::Open));
}

#[test]
fn mid_travel_lets_both_directions_fire() {
    let mut rig = Rig::new();
    rig.set_sensors(false, false);
    rig.clear();

    assert_eq!(request(&mut rig, ActuationRequest::Open), PulseOutcome::Fired);
    assert_eq!(request(&mut rig, ActuationRequest::Close), PulseOutcome::Fired);
    assert_eq!(rig.writes_to(Line::Open), vec![false, true]);
    assert_eq!(rig.writes_to(Line::Close), vec![false, true]);
}

#[test]
fn stop_fires_for_every_sensor_state() {
    for (open, close) in ALL_SENSOR_STATES {
        let mut rig = Rig::new();
        rig.set_sensors(open, close);
        rig.clear();

        assert_eq!(request(&mut rig, ActuationRequest::Stop), PulseOutcome::Fired);
        assert_eq!(rig.writes_to(Line::Stop), vec![false, true]);
    }
}

#[test]
fn stop_does_not_read_sensors() {
    let mut rig = Rig::new();
    let before = rig.sensor_reads();
    let _ = request(&mut rig, ActuationRequest::Stop);
    assert_eq!(rig.sensor_reads(), before);
}

#[test]
fn faulty_switches_block_both_directions() {
    let mut rig = Rig::new();
    rig.set_sensors(true, true);
    rig.clear();

    assert!(!request(&mut rig, ActuationRequest::Open).is_fired());
    assert!(!request(&mut rig, ActuationRequest::Close).is_fired());
    assert!(rig.trace.borrow().is_empty());
}

#[test]
fn pulse_only_touches_its_own_line() {
    let mut rig = Rig::new();
    rig.clear();

    let _ = request(&mut rig, ActuationRequest::Close);
    assert!(rig.writes_to(Line::Open).is_empty());
    assert!(rig.writes_to(Line::Stop).is_empty());
    assert!(rig.writes_to(Line::Power).is_empty());
}

#[test]
fn configured_pulse_length_is_used() {
    let config = GateConfig {
        pulse_ms: 750,
        ..GateConfig::default()
    };
    let mut rig = Rig::with_config(&config);
    rig.clear();

    let _ = request(&mut rig, ActuationRequest::Stop);
    assert_eq!(*rig.holds.borrow(), vec![750]);
}

#[test]
fn unsensed_install_never_suppresses() {
    let config = GateConfig {
        limit_sensors: false,
        ..GateConfig::default()
    };
    let mut rig = Rig::with_config(&config);
    // Switch state is irrelevant: the pins are never read.
    rig.set_sensors(true, true);
    rig.clear();

    assert_eq!(request(&mut rig, ActuationRequest::Open), PulseOutcome::Fired);
    assert_eq!(request(&mut rig, ActuationRequest::Close), PulseOutcome::Fired);
    assert_eq!(rig.sensor_reads(), 0);
}
