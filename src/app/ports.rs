//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ThermostatService (domain)
//! ```
//!
//! Driven adapters (sensor, relay, LED, clock, event sinks, storage)
//! implement these traits.  The [`ThermostatService`](super::service::ThermostatService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::config::ThermostatConfig;
use crate::control::StatusColour;

// ───────────────────────────────────────────────────────────────
// Analog collaborator (ADC driver → acquisition)
// ───────────────────────────────────────────────────────────────

/// Calibrated millivolt source. Deterministic within measurement noise.
pub trait AnalogReader {
    fn read_millivolts(&mut self) -> i32;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one calibrated temperature sample per call.
pub trait SensorPort {
    /// Always returns a value; plausibility is the filter's job.
    fn sample_temperature(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port. Both writes are idempotent.
pub trait ActuatorPort {
    /// Drive the heater relay. Returns `false` if the relay did not take
    /// the new state; the caller must not assume it did.
    #[must_use]
    fn set_heater(&mut self, on: bool) -> bool;

    /// Show a status colour.
    fn set_status(&mut self, colour: StatusColour);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock. Injected so tests can drive time.
pub trait MonotonicClock {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists configuration, setpoints included.
///
/// Implementations MUST validate before persisting and reject invalid
/// values with [`ConfigError::ValidationFailed`] rather than clamping.
pub trait ConfigPort {
    /// [`ConfigError::NotFound`] on first boot; the caller falls back to
    /// [`ThermostatConfig::default()`].
    fn load(&self) -> Result<ThermostatConfig, ConfigError>;

    fn save(&self, config: &ThermostatConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations and config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage (first boot).
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A field failed range validation. The message names the field.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
