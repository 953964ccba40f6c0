//! Inbound commands to the application service.
//!
//! These represent settings changes requested by the accessory layer that
//! the [`ThermostatService`](super::service::ThermostatService) applies.
//! Values are assumed to be within their declared ranges already.

use crate::config::ThermostatConfig;
use crate::control::TargetMode;

use super::setpoints::Setpoints;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Select OFF / HEAT / AUTO.
    SetMode(TargetMode),

    /// HEAT-mode target temperature (°C).
    SetTargetTemperature(f32),

    /// Lower edge of the AUTO pair (°C).
    SetHeatingThreshold(f32),

    /// Upper edge of the AUTO pair (°C).
    SetCoolingThreshold(f32),

    /// Replace every setpoint at once.
    UpdateSetpoints(Setpoints),

    /// Hot-reload tuning (hysteresis, band policy, periods). The active
    /// filter keeps running; a policy change takes effect on restart.
    UpdateConfig(ThermostatConfig),

    /// Persist the current config on the next auto-save check.
    SaveConfig,
}
