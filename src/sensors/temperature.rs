//! TMP36 analog temperature sensor.
//!
//! The sensor output is affine in temperature:
//! `temp_c = (mV - offset_mv) / mv_per_c`, with 500 mV at 0 °C and
//! 10 mV/°C for the TMP36. No range check happens here; the filter decides
//! what is plausible.

use serde::{Deserialize, Serialize};

use crate::app::ports::AnalogReader;

/// Linear calibration for an analog temperature sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub offset_mv: f32,
    pub mv_per_c: f32,
}

impl Calibration {
    pub const TMP36: Self = Self {
        offset_mv: 500.0,
        mv_per_c: 10.0,
    };

    pub fn to_celsius(&self, millivolts: i32) -> f32 {
        (millivolts as f32 - self.offset_mv) / self.mv_per_c
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::TMP36
    }
}

pub struct TemperatureSensor<R> {
    reader: R,
    cal: Calibration,
}

impl<R: AnalogReader> TemperatureSensor<R> {
    pub fn new(reader: R, cal: Calibration) -> Self {
        Self { reader, cal }
    }

    /// One calibrated reading in °C.
    pub fn sample(&mut self) -> f32 {
        let mv = self.reader.read_millivolts();
        self.cal.to_celsius(mv)
    }
}
