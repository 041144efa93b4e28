//! Unified error types for the gate controller.
//!
//! The interlock itself never fails: a refused actuation is a
//! [`PulseOutcome`](crate::interlock::PulseOutcome), not an error.  What
//! remains fallible is loading the deployment configuration; claiming
//! peripherals is reported through `anyhow` by the binary.  All variants
//! are `Copy` and carry static context strings.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
