//! Command queue → AppService → events.

use gatekeeper::app::commands::{GateCommand, ResetKind};
use gatekeeper::app::events::AppEvent;
use gatekeeper::app::queue::{CommandQueue, submit};
use gatekeeper::config::GateConfig;
use gatekeeper::drivers::button::{ButtonDriver, ButtonEvent};
use gatekeeper::drivers::relay::RelayChannel;
use gatekeeper::interlock::{ActuationRequest, SuppressReason};
use gatekeeper::sensors::GatePosition;

use crate::mock_hw::{Line, Rig};

#[test]
fn start_reports_power_and_position() {
    let mut rig = Rig::new();
    rig.set_sensors(false, true);

    rig.app.start(&mut rig.sink);

    assert_eq!(
        rig.sink.events,
        vec![AppEvent::Started {
            power: false,
            position: GatePosition::Closed,
        }]
    );
}

#[test]
fn drain_handles_commands_in_order() {
    let mut rig = Rig::new();
    rig.set_sensors(false, true);
    rig.clear();

    let queue = CommandQueue::new();
    assert!(submit(&queue, ActuationRequest::Close.into()));
    assert!(submit(&queue, ActuationRequest::Open.into()));
    assert!(submit(&queue, GateCommand::TogglePower));

    assert_eq!(rig.app.drain(&queue, &mut rig.sink), 3);
    assert_eq!(rig.app.drain(&queue, &mut rig.sink), 0);
    assert_eq!(rig.app.commands_handled(), 3);

    assert_eq!(
        rig.sink.events,
        vec![
            AppEvent::Suppressed {
                request: ActuationRequest::Close,
                reason: SuppressReason::AlreadyClosed,
            },
            AppEvent::Pulsed(RelayChannel::Open),
            AppEvent::PowerReported(true),
        ]
    );
    assert_eq!(rig.writes_to(Line::Open), vec![false, true]);
    assert!(rig.writes_to(Line::Close).is_empty());
}

#[test]
fn reset_request_is_forwarded_without_touching_outputs() {
    let mut rig = Rig::new();
    rig.clear();

    rig.app
        .handle_command(GateCommand::Reset(ResetKind::Factory), &mut rig.sink);

    assert_eq!(rig.sink.events, vec![AppEvent::ResetRequested(ResetKind::Factory)]);
    assert!(rig.trace.borrow().is_empty());
}

#[test]
fn button_tap_toggles_power_through_queue() {
    let mut rig = Rig::new();
    rig.clear();
    let queue = CommandQueue::new();
    let mut button = ButtonDriver::new(&GateConfig::default());

    assert_eq!(button.update(true, 1_000), None);
    assert_eq!(button.update(false, 1_200), None);
    let gesture = button.update(false, 1_260);
    assert_eq!(gesture, Some(ButtonEvent::Tap));
    assert!(submit(&queue, GateCommand::from(ButtonEvent::Tap)));

    rig.app.drain(&queue, &mut rig.sink);
    assert!(rig.app.power());
    assert_eq!(rig.writes_to(Line::Power), vec![true]);
}

#[test]
fn button_holds_map_to_resets() {
    assert_eq!(
        GateCommand::from(ButtonEvent::WifiReset),
        GateCommand::Reset(ResetKind::Wifi)
    );
    assert_eq!(
        GateCommand::from(ButtonEvent::FactoryReset),
        GateCommand::Reset(ResetKind::Factory)
    );
}
