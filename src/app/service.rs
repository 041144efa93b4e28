//! Application service — the control task.
//!
//! [`AppService`] owns the [`Interlock`] (pulse relays + limit switches)
//! and the [`GateState`] (power line).  It is the only code that calls
//! them, and it runs on a single task, which is what gives every output
//! line a single writer.
//!
//! ```text
//!  CommandQueue ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                   │        AppService        │
//!                   │  Interlock · GateState   │
//!                   └──────────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::info;

use crate::interlock::{Interlock, PulseOutcome};
use crate::power::GateState;

use super::commands::GateCommand;
use super::events::AppEvent;
use super::ports::EventSink;
use super::queue::CommandQueue;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService<I, P, D, W> {
    interlock: Interlock<I, P, D>,
    power: GateState<W>,
    commands_handled: u32,
}

impl<I, P, D, W> AppService<I, P, D, W>
where
    I: InputPin,
    P: OutputPin,
    D: DelayNs,
    W: OutputPin,
{
    pub fn new(interlock: Interlock<I, P, D>, power: GateState<W>) -> Self {
        Self {
            interlock,
            power,
            commands_handled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the boot state.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        let power = self.power.get_state();
        let position = self.interlock.snapshot().position();
        sink.emit(&AppEvent::Started { power, position });
        info!("AppService started (power={}, position={:?})", power, position);
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one command.  Actuation blocks for the pulse duration.
    pub fn handle_command(&mut self, cmd: GateCommand, sink: &mut impl EventSink) {
        self.commands_handled = self.commands_handled.wrapping_add(1);
        match cmd {
            GateCommand::Actuate(request) => match self.interlock.request(request) {
                PulseOutcome::Fired => sink.emit(&AppEvent::Pulsed(request.channel())),
                PulseOutcome::SuppressedBySafety(reason) => {
                    sink.emit(&AppEvent::Suppressed { request, reason });
                }
            },
            GateCommand::TogglePower => {
                self.power.toggle();
                sink.emit(&AppEvent::PowerReported(self.power.get_state()));
            }
            GateCommand::SetPower(target) => {
                self.power.set_state(target);
                sink.emit(&AppEvent::PowerReported(self.power.get_state()));
            }
            GateCommand::Reset(kind) => {
                info!("{:?} reset requested", kind);
                sink.emit(&AppEvent::ResetRequested(kind));
            }
        }
    }


    /// Handle every command currently waiting in `queue`, in FIFO order.
    /// Returns how many were handled.
    pub fn drain(&mut self, queue: &CommandQueue, sink: &mut impl EventSink) -> usize {
        let mut handled = 0;
        while let Ok(cmd) = queue.try_receive() {
            self.handle_command(cmd, sink);
            handled += 1;
        }
        handled
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current power flag.
    pub fn power(&self) -> bool {
        self.power.get_state()
    }

    /// Total commands handled since startup (wraps).
    pub fn commands_handled(&self) -> u32 {
        self.commands_handled
    }
}
