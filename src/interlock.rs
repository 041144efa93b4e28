//! Actuation interlock.
//!
//! Decides whether a requested gate motion may fire its relay.  The rule
//! set is deliberately tiny:
//!
//! | Request | Suppressed when       | Reason            |
//! |---------|-----------------------|-------------------|
//! | Open    | open limit is made    | `already open`    |
//! | Close   | close limit is made   | `already closed`  |
//! | Stop    | never                 |                   |
//!
//! Re-pulsing toward a limit already reached can hold the motor against
//! its mechanical stop or restart a finished travel.
//!
//! [`evaluate`] is the whole policy: a pure function of the request and
//! the latest [`SensorSnapshot`], with no memory between calls.
//! [`Interlock`] couples it to the hardware by taking a fresh snapshot,
//! evaluating, and pulsing the relay only on [`PulseOutcome::Fired`].

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::{info, warn};

use crate::drivers::relay::{RelayBank, RelayChannel};
use crate::sensors::{LimitSensors, SensorSnapshot};

/// A requested gate motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuationRequest {
    Open,
    Close,
    Stop,
}

impl ActuationRequest {
    /// The relay that carries this request.
    pub const fn channel(self) -> RelayChannel {
        match self {
            Self::Open => RelayChannel::Open,
            Self::Close => RelayChannel::Close,
            Self::Stop => RelayChannel::Stop,
        }
    }
}

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    AlreadyOpen,
    AlreadyClosed,
}

impl SuppressReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyOpen => "already open",
            Self::AlreadyClosed => "already closed",
        }
    }
}

impl fmt::Display for SuppressReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running a request through the interlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PulseOutcome {
    Fired,
    SuppressedBySafety(SuppressReason),
}

impl PulseOutcome {
    pub fn is_fired(self) -> bool {
        matches!(self, Self::Fired)
    }
}

/// The interlock policy.
pub fn evaluate(request: ActuationRequest, snap: &SensorSnapshot) -> PulseOutcome {
    match request {
        ActuationRequest::Open if snap.open_sensor => {
            PulseOutcome::SuppressedBySafety(SuppressReason::AlreadyOpen)
        }
        ActuationRequest::Close if snap.close_sensor => {
            PulseOutcome::SuppressedBySafety(SuppressReason::AlreadyClosed)
        }
        _ => PulseOutcome::Fired,
    }
}

/// Limit switches and relay bank behind the interlock.
///
/// This is the only path to the pulse relays.
pub struct Interlock<I, P, D> {
    sensors: LimitSensors<I>,
    relays: RelayBank<P, D>,
}

impl<I, P, D> Interlock<I, P, D>
where
    I: InputPin,
    P: OutputPin,
    D: DelayNs,
{
    pub fn new(sensors: LimitSensors<I>, relays: RelayBank<P, D>) -> Self {
        Self { sensors, relays }
    }

    pub fn request_open(&mut self) -> PulseOutcome {
        self.request(ActuationRequest::Open)
    }

    pub fn request_close(&mut self) -> PulseOutcome {
        self.request(ActuationRequest::Close)
    }

    pub fn request_stop(&mut self) -> PulseOutcome {
        self.request(ActuationRequest::Stop)
    }

    /// Evaluate `request` against a fresh sensor read and pulse if allowed.
    /// Blocks for the pulse duration when it fires.
    pub fn request(&mut self, request: ActuationRequest) -> PulseOutcome {
        // Stop has no interlock; skip the read.
        let snap = match request {
            ActuationRequest::Stop => SensorSnapshot::default(),
            _ => self.sensors.snapshot(),
        };

        let outcome = evaluate(request, &snap);
        match outcome {
            PulseOutcome::Fired => {
                info!("gate: {} requested, pulsing relay", request.channel());
                self.relays.pulse(request.channel());
            }
            PulseOutcome::SuppressedBySafety(reason) => {
                warn!("SAFETY: gate {}, ignoring {:?} request", reason, request);
            }
        }
        outcome
    }

    /// Fresh sensor read, for reporting.
    pub fn snapshot(&mut self) -> SensorSnapshot {
        self.sensors.snapshot()
    }
}
