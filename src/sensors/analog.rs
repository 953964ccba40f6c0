//! Calibrated analog reader for ADC1.
//!
//! Averages several raw conversions to knock down electrical noise, then
//! converts the mean to millivolts with the eFuse-backed calibration
//! scheme set up by `hw_init`. Consumers see one millivolt value per call.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicI32` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicI32, Ordering};

use crate::app::ports::AnalogReader;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// 750 mV ≈ 25 °C on a TMP36.
#[cfg(not(target_os = "espidf"))]
static SIM_MILLIVOLTS: AtomicI32 = AtomicI32::new(750);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_millivolts(mv: i32) {
    SIM_MILLIVOLTS.store(mv, Ordering::Relaxed);
}

pub struct AdcReader {
    channel: u32,
    samples: u32,
}

impl AdcReader {
    pub fn new(channel: u32, samples: u32) -> Self {
        Self {
            channel,
            samples: samples.max(1),
        }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    #[cfg(target_os = "espidf")]
    fn read_mv(&self) -> i32 {
        let sum: i64 = (0..self.samples)
            .map(|_| i64::from(hw_init::adc1_read_raw(self.channel)))
            .sum();
        let raw = (sum / i64::from(self.samples)) as i32;
        hw_init::adc1_raw_to_mv(raw)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_mv(&self) -> i32 {
        let sum: i64 = (0..self.samples)
            .map(|_| i64::from(SIM_MILLIVOLTS.load(Ordering::Relaxed)))
            .sum();
        (sum / i64::from(self.samples)) as i32
    }
}

impl AnalogReader for AdcReader {
    fn read_millivolts(&mut self) -> i32 {
        self.read_mv()
    }
}
