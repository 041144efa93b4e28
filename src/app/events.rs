//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to serial, report the power
//! parameter to the cloud, etc.

use super::commands::ResetKind;
use crate::drivers::relay::RelayChannel;
use crate::interlock::{ActuationRequest, SuppressReason};
use crate::sensors::GatePosition;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The application service has started (carries the boot power flag
    /// and the sensed position).
    Started { power: bool, position: GatePosition },

    /// A relay was pulsed.
    Pulsed(RelayChannel),

    /// The interlock refused a request.
    Suppressed {
        request: ActuationRequest,
        reason: SuppressReason,
    },

    /// Power flag as read back after a power command.  Emitted whether or
    /// not the value changed, so the remote side always converges.
    PowerReported(bool),

    /// A reset was requested from the button.
    ResetRequested(ResetKind),
}
