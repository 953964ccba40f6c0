//! Exponential moving average.

use super::{ReadingFilter, ValidRange};

#[derive(Debug, Clone)]
pub struct ExponentialAverage {
    range: ValidRange,
    alpha: f32,
    estimate: f32,
}

impl ExponentialAverage {
    /// `alpha` must lie in (0, 1); config validation guarantees it.
    pub fn new(range: ValidRange, alpha: f32, initial: f32) -> Self {
        debug_assert!(alpha > 0.0 && alpha < 1.0, "alpha out of (0, 1): {alpha}");
        Self {
            range,
            alpha,
            estimate: initial,
        }
    }
}

impl ReadingFilter for ExponentialAverage {
    fn sense(&mut self, reading: f32) -> bool {
        if !self.range.contains(reading) {
            return false;
        }
        self.estimate = self.alpha * self.estimate + (1.0 - self.alpha) * reading;
        true
    }

    fn publish(&mut self) -> Option<f32> {
        Some(self.estimate)
    }

    fn estimate(&self) -> f32 {
        self.estimate
    }
}
