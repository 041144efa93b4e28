//! Momentary relay bank (3-channel, active-low opto-isolated module).
//!
//! Each channel is wired in parallel with one push-button input of the
//! gate motor controller.  A pulse energises the coil for a fixed time and
//! releases it, which the controller sees as a button press.
//!
//! ## Safety contract
//!
//! A relay must never be left energised.  The release is performed by
//! [`EnergisedLine`]'s `Drop`, so it runs on every exit from the hold,
//! including an unwind out of the delay.  This driver is otherwise dumb:
//! whether a pulse *should* fire is decided by the interlock.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, error};

/// One physical relay output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayChannel {
    Open,
    Close,
    Stop,
}

impl fmt::Display for RelayChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Close => write!(f, "close"),
            Self::Stop => write!(f, "stop"),
        }
    }
}

/// Owns the three pulse lines and the delay used to time the hold.
pub struct RelayBank<P, D> {
    open: P,
    close: P,
    stop: P,
    delay: D,
    pulse_ms: u32,
}

impl<P: OutputPin, D: DelayNs> RelayBank<P, D> {
    /// Take ownership of the lines and drive all of them idle (HIGH).
    pub fn new(open: P, close: P, stop: P, delay: D, pulse_ms: u32) -> Self {
        let mut bank = Self {
            open,
            close,
            stop,
            delay,
            pulse_ms,
        };
        release(&mut bank.open, RelayChannel::Open);
        release(&mut bank.close, RelayChannel::Close);
        release(&mut bank.stop, RelayChannel::Stop);
        bank
    }

    /// Energise `channel` for the configured hold, then release it.
    ///
    /// Blocks the caller for the full pulse.  The line is back at idle when
    /// this returns or unwinds.
    pub fn pulse(&mut self, channel: RelayChannel) {
        let line = match channel {
            RelayChannel::Open => &mut self.open,
            RelayChannel::Close => &mut self.close,
            RelayChannel::Stop => &mut self.stop,
        };
        let guard = EnergisedLine::energise(line, channel);
        self.delay.delay_ms(self.pulse_ms);
        drop(guard);
        debug!("relay {} pulsed for {} ms", channel, self.pulse_ms);
    }
}

/// A relay line held at its active level.  Dropping it releases the line.
struct EnergisedLine<'a, P: OutputPin> {
    pin: &'a mut P,
    channel: RelayChannel,
}

impl<'a, P: OutputPin> EnergisedLine<'a, P> {
    fn energise(pin: &'a mut P, channel: RelayChannel) -> Self {
        if let Err(e) = pin.set_low() {
            error!("relay {}: energise write failed: {:?}", channel, e);
        }
        Self { pin, channel }
    }
}

impl<P: OutputPin> Drop for EnergisedLine<'_, P> {
    fn drop(&mut self) {
        release(self.pin, self.channel);
    }
}

fn release<P: OutputPin>(pin: &mut P, channel: RelayChannel) {
    if let Err(e) = pin.set_high() {
        error!("relay {}: release write failed: {:?}", channel, e);
    }
}
