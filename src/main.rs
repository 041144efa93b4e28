//! Gatekeeper Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │                                                          │
//! │  hardware (GPIO)   LogEventSink   MonotonicClock         │
//! │  button poll ──┐                  cloud client (ext.) ─┐ │
//! │                ▼                                       ▼ │
//! │  ────────────── COMMAND_QUEUE (embassy-sync) ─────────── │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │             AppService (control task)              │  │
//! │  │  Interlock (limits + relay bank) · GateState       │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{info, warn};

use gatekeeper::adapters::hardware;
use gatekeeper::adapters::log_sink::LogEventSink;
use gatekeeper::adapters::time::MonotonicClock;
use gatekeeper::app::commands::GateCommand;
use gatekeeper::app::queue::{COMMAND_QUEUE, submit};
use gatekeeper::config::GateConfig;
use gatekeeper::drivers::button::ButtonDriver;

/// Deployment overrides, baked in at build time.
const DEPLOYMENT_CONFIG: &str = include_str!("../gatekeeper.json");

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Gatekeeper v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = match GateConfig::from_json(DEPLOYMENT_CONFIG) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("deployment config rejected ({}), using defaults", e);
            GateConfig::default()
        }
    };
    info!(
        "Device: '{}' (pulse {} ms, limit switches {})",
        config.device_name,
        config.pulse_ms,
        if config.limit_sensors { "fitted" } else { "absent" }
    );

    // ── 3. Hardware + control task ────────────────────────────
    let (mut app, button_pin) = hardware::build(&config)?;
    let mut button = ButtonDriver::new(&config);
    let clock = MonotonicClock::new();
    let mut sink = LogEventSink::new();

    app.start(&mut sink);
    info!("System ready. Entering control loop.");

    // ── 4. Control loop ───────────────────────────────────────
    loop {
        // BOOT button is active-low.
        let pressed = button_pin.is_low();
        if let Some(gesture) = button.update(pressed, clock.now_ms()) {
            info!("Button: {:?}", gesture);
            submit(&COMMAND_QUEUE, GateCommand::from(gesture));
        }

        app.drain(&COMMAND_QUEUE, &mut sink);

        FreeRtos::delay_ms(config.poll_interval_ms);
    }
}
