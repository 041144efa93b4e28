//! System configuration parameters
//!
//! All tunable parameters for the gate controller.  [`GateConfig::default`]
//! is the canonical deployment; a deployment file (JSON) may override any
//! subset of fields through [`GateConfig::from_json`].

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Relay hold time for a single simulated button press.
pub const DEFAULT_PULSE_MS: u32 = 500;

/// GPIO assignment for every line the controller touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinMap {
    pub relay_open: i32,
    pub relay_close: i32,
    pub relay_stop: i32,
    pub power: i32,
    pub sensor_open: i32,
    pub sensor_close: i32,
    pub button: i32,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            relay_open: pins::RELAY_OPEN_GPIO,
            relay_close: pins::RELAY_CLOSE_GPIO,
            relay_stop: pins::RELAY_STOP_GPIO,
            power: pins::POWER_GPIO,
            sensor_open: pins::SENSOR_OPEN_GPIO,
            sensor_close: pins::SENSOR_CLOSE_GPIO,
            button: pins::BUTTON_GPIO,
        }
    }
}

impl PinMap {
    fn as_array(&self) -> [i32; 7] {
        [
            self.relay_open,
            self.relay_close,
            self.relay_stop,
            self.power,
            self.sensor_open,
            self.sensor_close,
            self.button,
        ]
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Name reported to the cloud collaborator.
    pub device_name: String<32>,
    pub pins: PinMap,

    // --- Actuation ---
    /// How long a relay is held energised per pulse (milliseconds).
    pub pulse_ms: u32,
    /// Power flag at boot.
    pub default_power: bool,
    /// `false` for installations without limit switches: the interlock
    /// then never suppresses open/close.
    pub limit_sensors: bool,

    // --- Button ---
    /// Hold time after which a release requests a Wi-Fi reset.
    pub wifi_reset_hold_ms: u32,
    /// Hold time after which a release requests a factory reset.
    pub factory_reset_hold_ms: u32,

    // --- Timing ---
    /// Control loop period (milliseconds).
    pub poll_interval_ms: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        let mut device_name = String::new();
        // Fits: 11 bytes into a 32-byte buffer.
        let _ = device_name.push_str("Garage Door");
        Self {
            device_name,
            pins: PinMap::default(),

            pulse_ms: DEFAULT_PULSE_MS,
            default_power: false,
            limit_sensors: true,

            wifi_reset_hold_ms: 3_000,
            factory_reset_hold_ms: 10_000,

            poll_interval_ms: 20, // 50 Hz button sampling
        }
    }
}

impl GateConfig {
    /// Parse a deployment file.  Missing fields take their defaults; the
    /// result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the controller unsafe or inert.
    pub fn validate(&self) -> Result<()> {
        if self.pulse_ms == 0 {
            return Err(Error::Config("pulse_ms must be non-zero"));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }
        if self.wifi_reset_hold_ms >= self.factory_reset_hold_ms {
            return Err(Error::Config(
                "wifi_reset_hold_ms must be shorter than factory_reset_hold_ms",
            ));
        }

        let pins = self.pins.as_array();
        if pins.iter().any(|&p| p < 0) {
            return Err(Error::Config("pin numbers must be non-negative"));
        }
        for (i, a) in pins.iter().enumerate() {
            if pins[i + 1..].contains(a) {
                return Err(Error::Config("pin assigned to more than one line"));
            }
        }
        Ok(())
    }
}
