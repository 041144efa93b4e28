//! GPIO pin assignments for the gate controller board.
//!
//! Defaults for [`PinMap`](crate::config::PinMap).  A deployment can
//! override any of them from its JSON config; nothing else in the crate
//! hard-codes a pin number.

// ---------------------------------------------------------------------------
// Relay bank (active-low modules: LOW = coil energised)
// ---------------------------------------------------------------------------

/// Momentary "open" input of the gate motor controller.
pub const RELAY_OPEN_GPIO: i32 = 25;
/// Momentary "close" input of the gate motor controller.
pub const RELAY_CLOSE_GPIO: i32 = 26;
/// Momentary "stop" input of the gate motor controller.
pub const RELAY_STOP_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Power line (held level, not pulsed)
// ---------------------------------------------------------------------------

/// Continuous output mirroring the logical power flag. HIGH = power on.
pub const POWER_GPIO: i32 = 32;

// ---------------------------------------------------------------------------
// Limit switches (internal pull-up, contact closes to GND)
// ---------------------------------------------------------------------------

/// Closes when the gate reaches the fully-open stop.
pub const SENSOR_OPEN_GPIO: i32 = 13;
/// Closes when the gate reaches the fully-closed stop.
pub const SENSOR_CLOSE_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// User button (BOOT, active-low)
// ---------------------------------------------------------------------------

pub const BUTTON_GPIO: i32 = 0;
