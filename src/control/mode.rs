//! Target mode and current heating state enumerations.
//!
//! Wire values follow the smart-home thermostat service: the accessory
//! layer hands us raw `u8`s and reads raw `u8`s back.

use log::warn;
use serde::{Deserialize, Serialize};

/// User-selected operating intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TargetMode {
    Off = 0,
    Heat = 1,
    /// Present for protocol compatibility only; there is no cooling hardware.
    Cool = 2,
    Auto = 3,
}

impl TargetMode {
    /// Decode a wire value. Anything unrecognised is treated as `Auto`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Off,
            1 => Self::Heat,
            2 => Self::Cool,
            3 => Self::Auto,
            other => {
                warn!("unknown target mode {}, falling back to Auto", other);
                Self::Auto
            }
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Whether the settings layer may select this mode.
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::Cool)
    }
}

/// Externally visible heating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum CurrentState {
    Idle = 0,
    Heating = 1,
    /// Never produced: the appliance cannot cool.
    Cooling = 2,
}

impl CurrentState {
    pub const fn from_heater(on: bool) -> Self {
        if on { Self::Heating } else { Self::Idle }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}
