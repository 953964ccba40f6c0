//! Hysteresis decision function.
//!
//! Pure: given the mode, setpoints, heater state and filtered temperature,
//! decide whether the heater flips and which colour the indicator shows.
//!
//! ```text
//!            TooCold      │      InBand       │     TooHot
//!   ─────────────────────low═════════════════high──────────────▶ °C
//!   off → ON              │  (no change)      │         on → OFF
//! ```
//!
//! The bounds are inclusive members of the dead band: the heater only
//! switches on strictly below `low` and off strictly above `high`.

use serde::{Deserialize, Serialize};

use super::colour::StatusColour;
use super::mode::TargetMode;
use crate::app::setpoints::Setpoints;

/// How the AUTO band is derived from the heating/cooling threshold pair.
///
/// HEAT always uses `[target - h, target + h]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandPolicy {
    /// `[heating - h, cooling + h]`: hysteresis widens the pair outwards.
    Outset,
    /// `[heating, cooling]`: the pair already is the dead band.
    Edges,
}

/// Closed temperature interval with no actuation change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub low: f32,
    pub high: f32,
}

impl Band {
    pub fn classify(&self, temp: f32) -> StatusColour {
        if temp < self.low {
            StatusColour::TooCold
        } else if temp > self.high {
            StatusColour::TooHot
        } else {
            StatusColour::InBand
        }
    }
}

/// Everything one decision needs.
#[derive(Debug, Clone, Copy)]
pub struct DecisionInput<'a> {
    pub setpoints: &'a Setpoints,
    pub heater_on: bool,
    pub current_c: f32,
    /// Half-width of the hysteresis band.
    pub hysteresis_c: f32,
    pub policy: BandPolicy,
}

/// Output of one decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Flip the heater relative to its current state.
    pub toggle: bool,
    pub colour: StatusColour,
}

/// Dead band for `mode`, or `None` when mode is OFF.
pub fn band_for(setpoints: &Setpoints, hysteresis_c: f32, policy: BandPolicy) -> Option<Band> {
    match setpoints.mode {
        TargetMode::Off => None,
        TargetMode::Heat => Some(Band {
            low: setpoints.target_c - hysteresis_c,
            high: setpoints.target_c + hysteresis_c,
        }),
        TargetMode::Auto | TargetMode::Cool => Some(match policy {
            BandPolicy::Outset => Band {
                low: setpoints.heating_threshold_c - hysteresis_c,
                high: setpoints.cooling_threshold_c + hysteresis_c,
            },
            BandPolicy::Edges => Band {
                low: setpoints.heating_threshold_c,
                high: setpoints.cooling_threshold_c,
            },
        }),
    }
}

pub fn decide(input: &DecisionInput<'_>) -> Decision {
    let Some(band) = band_for(input.setpoints, input.hysteresis_c, input.policy) else {
        return Decision {
            toggle: input.heater_on,
            colour: StatusColour::Off,
        };
    };

    let colour = band.classify(input.current_c);
    let toggle = match colour {
        StatusColour::TooCold => !input.heater_on,
        StatusColour::TooHot => input.heater_on,
        _ => false,
    };

    Decision { toggle, colour }
}
