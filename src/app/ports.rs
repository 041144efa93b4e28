//! Port traits: the boundary between the control task and the outside world.
//!
//! ```text
//!   queue ──▶ AppService ──▶ EventSink ──▶ adapter (log, cloud report)
//! ```
//!
//! Hardware is not a port here: the service is generic over the
//! `embedded-hal` pin and delay traits directly, which already are the
//! hardware boundary.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log, cloud parameter report, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
