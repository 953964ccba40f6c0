//! Outbound application events.
//!
//! The [`ThermostatService`](super::service::ThermostatService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them (log to serial, push to the
//! accessory layer, etc.).

use crate::control::{CurrentState, StatusColour, TargetMode};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service was constructed (carries the seed reading).
    Started { seed_c: f32 },

    /// A raw sample fell outside the valid range and was dropped.
    ReadingRejected { reading_c: f32 },

    /// The filter published a new estimate.
    TemperaturePublished { current_c: f32 },

    /// The heater relay was switched.
    HeaterChanged { from: CurrentState, to: CurrentState },

    /// The setpoints changed.
    SetpointsChanged,

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryData {
    pub mode: TargetMode,
    pub target_c: f32,
    pub heating_threshold_c: f32,
    pub cooling_threshold_c: f32,
    /// Filtered estimate used by the last decision.
    pub estimate_c: f32,
    /// Value last reported to the accessory layer.
    pub reported_c: f32,
    pub heater: CurrentState,
    pub colour: StatusColour,
}
