//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC on target).  A cloud-report adapter implements the
//! same trait.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { power, position } => {
                info!("START | power={} position={:?}", on_off(*power), position);
            }
            AppEvent::Pulsed(channel) => {
                info!("PULSE | relay={}", channel);
            }
            AppEvent::Suppressed { request, reason } => {
                debug!("BLOCK | request={:?} reason={}", request, reason);
            }
            AppEvent::PowerReported(power) => {
                info!("POWER | {}", on_off(*power));
            }
            AppEvent::ResetRequested(kind) => {
                warn!("RESET | {:?} reset requested", kind);
            }
        }
    }
}

fn on_off(v: bool) -> &'static str {
    if v { "ON" } else { "OFF" }
}
