//! Reading accumulator / filter.
//!
//! Turns a stream of raw samples into the filtered estimate the decision
//! engine consumes. Two interchangeable policies exist, selected once per
//! deployment through [`FilterPolicy`]:
//!
//! | Policy        | Sense tick                 | Publish tick                     |
//! |---------------|----------------------------|----------------------------------|
//! | `Windowed`    | add valid sample to sum    | mean if `count > min_readings`   |
//! | `Exponential` | blend valid sample into EMA | report current EMA              |
//!
//! Both reject samples outside [`ValidRange`] without touching the estimate,
//! and both start from a real reading handed in at construction.

pub mod exponential;
pub mod windowed;

use serde::{Deserialize, Serialize};

use exponential::ExponentialAverage;
use windowed::WindowedAverage;

/// Closed interval of plausible readings (°C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidRange {
    pub min_c: f32,
    pub max_c: f32,
}

impl ValidRange {
    pub fn contains(&self, reading: f32) -> bool {
        self.min_c <= reading && reading <= self.max_c
    }
}

/// Which filter to run and its tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FilterPolicy {
    /// Running sum over at least `min_readings + 1` samples.
    Windowed { min_readings: u32 },
    /// EMA; `alpha` in (0, 1), closer to 1 smooths more.
    Exponential { alpha: f32 },
}

/// Common interface of the filter policies.
pub trait ReadingFilter {
    /// Offer one raw sample. Returns `false` if it was discarded.
    fn sense(&mut self, reading: f32) -> bool;

    /// Publish tick. Returns the estimate if a value was published.
    fn publish(&mut self) -> Option<f32>;

    /// Current filtered estimate.
    fn estimate(&self) -> f32;
}

/// The filter selected by configuration.
#[derive(Debug, Clone)]
pub enum TemperatureFilter {
    Windowed(WindowedAverage),
    Exponential(ExponentialAverage),
}

impl TemperatureFilter {
    /// Build the configured policy, seeded with `initial` (a real reading).
    pub fn new(policy: FilterPolicy, range: ValidRange, initial: f32) -> Self {
        match policy {
            FilterPolicy::Windowed { min_readings } => {
                Self::Windowed(WindowedAverage::new(range, min_readings, initial))
            }
            FilterPolicy::Exponential { alpha } => {
                Self::Exponential(ExponentialAverage::new(range, alpha, initial))
            }
        }
    }

    pub fn policy_name(&self) -> &'static str {
        match self {
            Self::Windowed(_) => "windowed",
            Self::Exponential(_) => "exponential",
        }
    }
}

impl ReadingFilter for TemperatureFilter {
    fn sense(&mut self, reading: f32) -> bool {
        match self {
            Self::Windowed(f) => f.sense(reading),
            Self::Exponential(f) => f.sense(reading),
        }
    }

    fn publish(&mut self) -> Option<f32> {
        match self {
            Self::Windowed(f) => f.publish(),
            Self::Exponential(f) => f.publish(),
        }
    }

    fn estimate(&self) -> f32 {
        match self {
            Self::Windowed(f) => f.estimate(),
            Self::Exponential(f) => f.estimate(),
        }
    }
}
