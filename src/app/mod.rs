//! Application core — command dispatch around the interlocked gate.
//!
//! Everything outside the control task (button sampling, the cloud
//! client) talks to the gate by placing a [`GateCommand`] on the
//! [`queue`].  The [`AppService`] is the single consumer: it owns the
//! interlock and the power state, so every output line keeps exactly one
//! writer.  Results flow back out as [`AppEvent`]s through the
//! [`EventSink`] port.
//!
//! [`GateCommand`]: commands::GateCommand
//! [`AppService`]: service::AppService
//! [`AppEvent`]: events::AppEvent
//! [`EventSink`]: ports::EventSink

pub mod commands;
pub mod events;
pub mod ports;
pub mod queue;
pub mod service;
