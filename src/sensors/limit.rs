//! End-of-travel limit switches.
//!
//! Each switch is a dry contact wired between the GPIO and GND with the
//! internal pull-up enabled, so a closed contact (gate touching that stop)
//! reads electrically LOW.  The predicates here return the logical value:
//! `true` = gate at that limit.
//!
//! ## Unsensed installations
//!
//! Gates without switches are built with [`LimitSensors::unsensed`].  The
//! pins are then never read and both predicates return `false`, which
//! lets every open/close request through the interlock.

use embedded_hal::digital::InputPin;
use log::warn;

/// Point-in-time reading of both switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorSnapshot {
    /// Gate is touching the fully-open stop.
    pub open_sensor: bool,
    /// Gate is touching the fully-closed stop.
    pub close_sensor: bool,
}

/// Position derived from a snapshot, for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePosition {
    Open,
    Closed,
    /// Neither switch made: moving, stopped mid-way, or unsensed.
    Travelling,
    /// Both switches made at once.  Wiring or switch fault.
    Fault,
}

impl SensorSnapshot {
    pub fn position(&self) -> GatePosition {
        match (self.open_sensor, self.close_sensor) {
            (true, false) => GatePosition::Open,
            (false, true) => GatePosition::Closed,
            (false, false) => GatePosition::Travelling,
            (true, true) => GatePosition::Fault,
        }
    }
}

/// The pair of limit switches.
pub struct LimitSensors<I> {
    /// `None` when the installation has no switches.
    pins: Option<(I, I)>,
}

impl<I: InputPin> LimitSensors<I> {
    /// Switches on `open` and `close`.  The pins must already be configured
    /// as inputs with pull-ups.
    pub fn new(open: I, close: I) -> Self {
        Self {
            pins: Some((open, close)),
        }
    }

    /// No switches fitted.
    pub fn unsensed() -> Self {
        Self { pins: None }
    }

    /// Gate is at the fully-open stop.
    pub fn is_open(&mut self) -> bool {
        match &mut self.pins {
            Some((open, _)) => read_contact(open, "open"),
            None => false,
        }
    }

    /// Gate is at the fully-closed stop.
    pub fn is_closed(&mut self) -> bool {
        match &mut self.pins {
            Some((_, close)) => read_contact(close, "close"),
            None => false,
        }
    }

    /// Fresh read of both switches.
    pub fn snapshot(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            open_sensor: self.is_open(),
            close_sensor: self.is_closed(),
        }
    }
}

/// A read error counts as "contact made" so that a broken input suppresses
/// motion toward its limit instead of permitting it.
fn read_contact<I: InputPin>(pin: &mut I, name: &str) -> bool {
    match pin.is_low() {
        Ok(level_low) => level_low,
        Err(e) => {
            warn!("limit switch '{}' read failed ({:?}), assuming at limit", name, e);
            true
        }
    }
}
