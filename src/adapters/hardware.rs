//! Hardware adapter — claims the ESP32 GPIOs and assembles the control task.
//!
//! This is the only module that touches `esp-idf-hal`.  It turns the pin
//! numbers in [`GateConfig`] into `PinDriver`s, which implement the
//! `embedded-hal` traits the rest of the crate is written against.
//! Compiled on `target_os = "espidf"` only.

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use log::info;

use crate::app::service::AppService;
use crate::config::GateConfig;
use crate::drivers::relay::RelayBank;
use crate::interlock::Interlock;
use crate::power::GateState;
use crate::sensors::LimitSensors;

pub type OutputLine = PinDriver<'static, AnyOutputPin, Output>;
pub type InputLine = PinDriver<'static, AnyIOPin, Input>;

/// The control task as wired on the board.
pub type GateService = AppService<InputLine, OutputLine, FreeRtos, OutputLine>;

/// Claim every configured line and build the service plus the button input.
///
/// `config` must have passed [`GateConfig::validate`]: each GPIO number is
/// then claimed exactly once.
pub fn build(config: &GateConfig) -> Result<(GateService, InputLine)> {
    let p = &config.pins;

    let relays = RelayBank::new(
        output(p.relay_open)?,
        output(p.relay_close)?,
        output(p.relay_stop)?,
        FreeRtos,
        config.pulse_ms,
    );

    let sensors = if config.limit_sensors {
        LimitSensors::new(input_pull_up(p.sensor_open)?, input_pull_up(p.sensor_close)?)
    } else {
        info!("hardware: no limit switches fitted, interlock inactive");
        LimitSensors::unsensed()
    };

    let power = GateState::new(output(p.power)?, config.default_power);
    let button = input_pull_up(p.button)?;

    info!(
        "hardware: relays {}/{}/{}, power {}, limits {}/{}, button {}",
        p.relay_open, p.relay_close, p.relay_stop, p.power, p.sensor_open, p.sensor_close, p.button
    );

    Ok((AppService::new(Interlock::new(sensors, relays), power), button))
}

fn output(gpio: i32) -> Result<OutputLine> {
    // SAFETY: validated config assigns each GPIO to one line only, and
    // `build` runs once at boot, so no other driver owns this pin.
    let pin = unsafe { AnyOutputPin::new(gpio) };
    Ok(PinDriver::output(pin)?)
}

fn input_pull_up(gpio: i32) -> Result<InputLine> {
    // SAFETY: as for `output`.
    let pin = unsafe { AnyIOPin::new(gpio) };
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}
