//! Sensor subsystem: analog acquisition for the thermostat.
//!
//! [`analog::AdcReader`] produces multisampled, calibrated millivolts;
//! [`temperature::TemperatureSensor`] turns them into °C.

pub mod analog;
pub mod temperature;

pub use analog::AdcReader;
pub use temperature::{Calibration, TemperatureSensor};
