//! Sensor subsystem.
//!
//! The gate has exactly two inputs, the end-of-travel limit switches.
//! [`LimitSensors`] reads them and produces a [`SensorSnapshot`] on every
//! query; nothing is cached between reads.

pub mod limit;

pub use limit::{GatePosition, LimitSensors, SensorSnapshot};
