//! Command queue into the control task.
//!
//! A bounded `embassy-sync` channel carries [`GateCommand`]s from any
//! producer (button poll, cloud write callback running on another task)
//! to the single control loop.  No heap allocation.
//!
//! ```text
//! ┌──────────────┐  GateCommand  ┌──────────────┐
//! │ Button poll  │──────────────▶│              │
//! │ Cloud client │──────────────▶│ Control Loop │
//! └──────────────┘               └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use super::commands::GateCommand;

/// Channel depth for inbound commands.
pub const COMMAND_DEPTH: usize = 8;

/// Queue type shared between producers and the control loop.
pub type CommandQueue = Channel<CriticalSectionRawMutex, GateCommand, COMMAND_DEPTH>;

/// The firmware-wide command queue.
pub static COMMAND_QUEUE: CommandQueue = Channel::new();

/// Enqueue `cmd` without blocking.  Returns `false` (and logs) if the
/// queue is full; the command is dropped and the producer may retry.
pub fn submit(queue: &CommandQueue, cmd: GateCommand) -> bool {
    match queue.try_send(cmd) {
        Ok(()) => true,
        Err(_) => {
            warn!("command queue full, dropping {:?}", cmd);
            false
        }
    }
}
