//! Adapters — concrete implementations at the edges of the control task.
//!
//! | Adapter     | Provides                  | Connects to              |
//! |-------------|---------------------------|--------------------------|
//! | `hardware`  | Pin drivers, `AppService` | ESP32 GPIO (espidf only) |
//! | `log_sink`  | EventSink                 | Serial log output        |
//! | `time`      | Monotonic milliseconds    | ESP32 system timer       |

#[cfg(target_os = "espidf")]
pub mod hardware;
pub mod log_sink;
pub mod time;
