//! Polled BOOT-button driver with tap and hold detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up.  The main loop samples the
//! level every control tick and passes it to [`ButtonDriver::update`],
//! which runs the debounce + gesture state machine.  Gestures are
//! classified once the release has been stable for `DEBOUNCE_MS`, so a
//! long hold never also produces a tap, and a contact glitch mid-hold
//! does not split the gesture.
//!
//! ## Gesture detection
//!
//! | Gesture       | Condition (hold time on release)     | Event           |
//! |---------------|--------------------------------------|-----------------|
//! | Tap           | `DEBOUNCE_MS` ..  wifi_reset_hold    | `Tap`           |
//! | Wi-Fi reset   | wifi_reset_hold .. factory_reset_hold| `WifiReset`     |
//! | Factory reset | >= factory_reset_hold                | `FactoryReset`  |

use crate::config::GateConfig;

/// Contact bounce shorter than this is ignored.
const DEBOUNCE_MS: u32 = 50;

/// Button events emitted after gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Tap,
    WifiReset,
    FactoryReset,
}

/// Internal state machine for gesture detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Released,
    Pressed { since_ms: u32 },
    /// Read released, waiting for the release to settle.
    Releasing { since_ms: u32, released_at_ms: u32 },
}

pub struct ButtonDriver {
    state: GestureState,
    wifi_reset_hold_ms: u32,
    factory_reset_hold_ms: u32,
}

impl ButtonDriver {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            state: GestureState::Released,
            wifi_reset_hold_ms: config.wifi_reset_hold_ms,
            factory_reset_hold_ms: config.factory_reset_hold_ms,
        }
    }

    /// Feed one sample.  `pressed` is the logical level (contact made);
    /// `now_ms` is monotonic time, allowed to wrap.
    /// Returns a classified gesture once the release has settled, if any.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        match (self.state, pressed) {
            (GestureState::Released, true) => {
                self.state = GestureState::Pressed { since_ms: now_ms };
                None
            }
            (GestureState::Pressed { since_ms }, false) => {
                self.state = GestureState::Releasing {
                    since_ms,
                    released_at_ms: now_ms,
                };
                None
            }
            // Bounce: the hold continues from its original start.
            (GestureState::Releasing { since_ms, .. }, true) => {
                self.state = GestureState::Pressed { since_ms };
                None
            }
            (
                GestureState::Releasing {
                    since_ms,
                    released_at_ms,
                },
                false,
            ) => {
                if now_ms.wrapping_sub(released_at_ms) < DEBOUNCE_MS {
                    return None;
                }
                self.state = GestureState::Released;
                self.classify(released_at_ms.wrapping_sub(since_ms))
            }
            _ => None,
        }
    }

    fn classify(&self, held_ms: u32) -> Option<ButtonEvent> {
        if held_ms < DEBOUNCE_MS {
            None
        } else if held_ms < self.wifi_reset_hold_ms {
            Some(ButtonEvent::Tap)
        } else if held_ms < self.factory_reset_hold_ms {
            Some(ButtonEvent::WifiReset)
        } else {
            Some(ButtonEvent::FactoryReset)
        }
    }
}
