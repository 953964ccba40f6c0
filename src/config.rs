//! System configuration parameters
//!
//! All tunable parameters for the thermostat, plus the persisted setpoints.
//! Two deployment profiles reproduce the two hardware variants; the
//! default is the exponential-average board.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::app::setpoints::Setpoints;
use crate::control::BandPolicy;
use crate::filter::{FilterPolicy, ValidRange};
use crate::scheduler::LoopPeriods;
use crate::sensors::Calibration;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatConfig {
    // --- Acquisition ---
    /// Affine millivolt → °C transform of the sensor.
    pub calibration: Calibration,

    // --- Filter ---
    /// Readings outside this closed interval are discarded.
    pub valid_range: ValidRange,
    pub filter: FilterPolicy,

    // --- Decision ---
    /// Half-width of the hysteresis band (°C).
    pub hysteresis_c: f32,
    pub band_policy: BandPolicy,
    /// Decide on the next tick after a setpoint change instead of waiting
    /// out the decision period.
    pub decide_on_change: bool,

    // --- Timing ---
    pub periods: LoopPeriods,
    /// Telemetry report interval (milliseconds)
    pub telemetry_period_ms: u64,

    // --- User settings ---
    pub setpoints: Setpoints,
}

impl ThermostatConfig {
    /// Board with an exponential moving average and a [-10, 40] °C window.
    pub fn exponential_profile() -> Self {
        Self {
            calibration: Calibration::TMP36,
            valid_range: ValidRange {
                min_c: -10.0,
                max_c: 40.0,
            },
            filter: FilterPolicy::Exponential { alpha: 0.9 },
            hysteresis_c: 1.0,
            band_policy: BandPolicy::Outset,
            decide_on_change: true,
            periods: LoopPeriods {
                sense_ms: 1_000,
                publish_ms: 5_000,
                decide_ms: 5_000,
            },
            telemetry_period_ms: 60_000,
            setpoints: Setpoints::default(),
        }
    }

    /// Board with a windowed average and a [-10, 30] °C window.  The
    /// estimate is checked for publication on every tick.
    pub fn windowed_profile() -> Self {
        Self {
            calibration: Calibration::TMP36,
            valid_range: ValidRange {
                min_c: -10.0,
                max_c: 30.0,
            },
            filter: FilterPolicy::Windowed { min_readings: 10 },
            hysteresis_c: 1.0,
            band_policy: BandPolicy::Outset,
            decide_on_change: false,
            periods: LoopPeriods {
                sense_ms: 500,
                publish_ms: 0,
                decide_ms: 10_000,
            },
            telemetry_period_ms: 60_000,
            setpoints: Setpoints::default(),
        }
    }

    /// Parse a JSON override (host tooling, provisioning).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|_| ConfigError::Corrupted)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Range-check every field. Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.calibration.mv_per_c > 0.0) {
            return Err(ConfigError::ValidationFailed("calibration.mv_per_c must be > 0"));
        }
        if !(self.valid_range.min_c < self.valid_range.max_c) {
            return Err(ConfigError::ValidationFailed(
                "valid_range.min_c must be < valid_range.max_c",
            ));
        }
        match self.filter {
            FilterPolicy::Exponential { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(ConfigError::ValidationFailed(
                        "filter alpha must be in (0, 1)",
                    ));
                }
            }
            FilterPolicy::Windowed { min_readings } => {
                if min_readings > 1_000 {
                    return Err(ConfigError::ValidationFailed(
                        "filter min_readings must be 0–1000",
                    ));
                }
            }
        }
        if !(0.0..=5.0).contains(&self.hysteresis_c) {
            return Err(ConfigError::ValidationFailed("hysteresis_c must be 0.0–5.0"));
        }
        if !(10..=60_000).contains(&self.periods.sense_ms) {
            return Err(ConfigError::ValidationFailed("periods.sense_ms must be 10–60000"));
        }
        if self.periods.publish_ms > 600_000 {
            return Err(ConfigError::ValidationFailed(
                "periods.publish_ms must be 0–600000",
            ));
        }
        if !(100..=600_000).contains(&self.periods.decide_ms) {
            return Err(ConfigError::ValidationFailed(
                "periods.decide_ms must be 100–600000",
            ));
        }
        if self.telemetry_period_ms < 1_000 {
            return Err(ConfigError::ValidationFailed(
                "telemetry_period_ms must be >= 1000",
            ));
        }
        self.setpoints.validate()
    }
}

impl Default for ThermostatConfig {
    fn default() -> Self {
        Self::exponential_profile()
    }
}
