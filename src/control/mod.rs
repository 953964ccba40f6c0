//! Control decision engine.
//!
//! A thermostat has exactly two reachable heating states, so the state
//! machine collapses into a single hysteresis decision per tick: the
//! service feeds it the filtered estimate and applies the result.
//!
//! ```text
//!  IDLE ──[estimate < low]──▶ HEATING
//!    ▲                           │
//!    └──[estimate > high, or mode OFF]
//! ```

pub mod colour;
pub mod hysteresis;
pub mod mode;

pub use colour::StatusColour;
pub use hysteresis::{Band, BandPolicy, Decision, DecisionInput, decide};
pub use mode::{CurrentState, TargetMode};
