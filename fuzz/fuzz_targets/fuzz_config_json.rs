//! Fuzz target: `GateConfig::from_json`
//!
//! Feeds arbitrary bytes to the deployment-config parser and asserts that
//! it never panics and that anything it accepts is also accepted by
//! `validate()`: no duplicate pins, non-zero pulse, ordered reset holds.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use gatekeeper::config::GateConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = GateConfig::from_json(text) {
        assert!(config.validate().is_ok(), "from_json returned an invalid config");
        assert!(config.pulse_ms > 0);
        assert!(config.wifi_reset_hold_ms < config.factory_reset_hold_ms);
    }
});
