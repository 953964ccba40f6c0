//! User-facing setpoints and their declared ranges.
//!
//! The accessory layer enforces the ranges before anything reaches the
//! service; the decision engine trusts whatever it is given. The ranges
//! live here so the settings layer and the config port validate against
//! the same numbers.

use serde::{Deserialize, Serialize};

use super::ports::ConfigError;
use crate::control::TargetMode;

/// Declared range and step of one temperature setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetpointRange {
    pub min_c: f32,
    pub max_c: f32,
    pub step_c: f32,
}

impl SetpointRange {
    pub fn contains(&self, value: f32) -> bool {
        (self.min_c..=self.max_c).contains(&value)
    }

    /// True if `value` lies on the step grid anchored at `min_c`.
    pub fn on_step(&self, value: f32) -> bool {
        let steps = (value - self.min_c) / self.step_c;
        (steps - steps.round()).abs() < 1e-3
    }
}

pub const TARGET_RANGE: SetpointRange = SetpointRange {
    min_c: 10.0,
    max_c: 38.0,
    step_c: 1.0,
};

pub const HEATING_THRESHOLD_RANGE: SetpointRange = SetpointRange {
    min_c: 0.0,
    max_c: 25.0,
    step_c: 1.0,
};

pub const COOLING_THRESHOLD_RANGE: SetpointRange = SetpointRange {
    min_c: 10.0,
    max_c: 35.0,
    step_c: 1.0,
};

/// Read-only snapshot of the user's settings, handed to each decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Setpoints {
    pub mode: TargetMode,
    /// Used in HEAT.
    pub target_c: f32,
    /// Lower edge of the AUTO pair.
    pub heating_threshold_c: f32,
    /// Upper edge of the AUTO pair.
    pub cooling_threshold_c: f32,
}

impl Default for Setpoints {
    fn default() -> Self {
        Self {
            mode: TargetMode::Off,
            target_c: 20.0,
            heating_threshold_c: 18.0,
            cooling_threshold_c: 24.0,
        }
    }
}

impl Setpoints {
    /// Range/step check used by the settings layer and the config port.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mode.is_selectable() {
            return Err(ConfigError::ValidationFailed("mode COOL is not supported"));
        }
        if !TARGET_RANGE.contains(self.target_c) || !TARGET_RANGE.on_step(self.target_c) {
            return Err(ConfigError::ValidationFailed(
                "target_c must be 10–38 in steps of 1",
            ));
        }
        if !HEATING_THRESHOLD_RANGE.contains(self.heating_threshold_c)
            || !HEATING_THRESHOLD_RANGE.on_step(self.heating_threshold_c)
        {
            return Err(ConfigError::ValidationFailed(
                "heating_threshold_c must be 0–25 in steps of 1",
            ));
        }
        if !COOLING_THRESHOLD_RANGE.contains(self.cooling_threshold_c)
            || !COOLING_THRESHOLD_RANGE.on_step(self.cooling_threshold_c)
        {
            return Err(ConfigError::ValidationFailed(
                "cooling_threshold_c must be 10–35 in steps of 1",
            ));
        }
        Ok(())
    }
}
