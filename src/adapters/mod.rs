//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements      | Connects to                 |
//! |------------|-----------------|-----------------------------|
//! | `hardware` | SensorPort      | TMP36 on ESP32 ADC1         |
//! |            | ActuatorPort    | Heater relay GPIO, RGB LEDC |
//! | `log_sink` | EventSink       | Serial log output           |
//! | `nvs`      | ConfigPort      | NVS / in-memory store       |
//! | `time`     | MonotonicClock  | ESP32 system timer          |

pub mod hardware;
pub mod log_sink;
pub mod nvs;
pub mod time;
