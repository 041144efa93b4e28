//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (BOOT button,
//! cloud parameter writes) that the [`AppService`](super::service::AppService)
//! interprets and acts upon.

use crate::drivers::button::ButtonEvent;
use crate::interlock::ActuationRequest;

/// Kind of reset a long button hold asks for.  Carrying it out belongs to
/// the connectivity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    Wifi,
    Factory,
}

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCommand {
    /// Pulse open/close/stop, subject to the interlock.
    Actuate(ActuationRequest),

    /// Invert the power flag (button tap).
    TogglePower,

    /// Set the power flag to an explicit value (cloud parameter write).
    SetPower(bool),

    /// Forward a reset request to the connectivity layer.
    Reset(ResetKind),
}

impl From<ButtonEvent> for GateCommand {
    fn from(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::Tap => Self::TogglePower,
            ButtonEvent::WifiReset => Self::Reset(ResetKind::Wifi),
            ButtonEvent::FactoryReset => Self::Reset(ResetKind::Factory),
        }
    }
}

impl From<ActuationRequest> for GateCommand {
    fn from(request: ActuationRequest) -> Self {
        Self::Actuate(request)
    }
}
