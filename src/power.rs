//! Authoritative power flag and the held output line that mirrors it.
//!
//! Unlike the pulse relays, the power line carries a continuous level:
//! HIGH while the flag is `true`, LOW while it is `false`.  [`GateState`]
//! owns the line outright, so the level on the pin is always the last
//! value stored here.
//!
//! ```text
//!             set_state(true)
//!   Idle ───────────────────────▶ Energized
//!        ◀───────────────────────
//!             set_state(false)
//! ```
//!
//! Either state may be the initial one (see `GateConfig::default_power`);
//! there are no timed or automatic transitions.

use embedded_hal::digital::{OutputPin, PinState};
use log::{error, info};

pub struct GateState<P> {
    power: bool,
    line: P,
}

impl<P: OutputPin> GateState<P> {
    /// Take ownership of the power line and drive it to `default_power`.
    pub fn new(line: P, default_power: bool) -> Self {
        let mut state = Self {
            power: default_power,
            line,
        };
        state.drive();
        state
    }

    pub fn get_state(&self) -> bool {
        self.power
    }

    /// Store `target`.  Writes the line only when the value changes.
    pub fn set_state(&mut self, target: bool) {
        if self.power == target {
            return;
        }
        self.power = target;
        self.drive();
        info!("power -> {}", if target { "ON" } else { "OFF" });
    }

    /// Invert the flag; returns the new value.
    pub fn toggle(&mut self) -> bool {
        let target = !self.get_state();
        self.set_state(target);
        target
    }

    fn drive(&mut self) {
        if let Err(e) = self.line.set_state(PinState::from(self.power)) {
            error!("power line write failed: {:?}", e);
        }
    }
}
