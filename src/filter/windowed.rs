//! Windowed average: publish the mean of the samples collected since the
//! last publish, but only once enough of them have accumulated.

use super::{ReadingFilter, ValidRange};

#[derive(Debug, Clone)]
pub struct WindowedAverage {
    range: ValidRange,
    /// Publish requires strictly more valid samples than this.
    min_readings: u32,
    count: u32,
    sum: f32,
    estimate: f32,
}

impl WindowedAverage {
    pub fn new(range: ValidRange, min_readings: u32, initial: f32) -> Self {
        Self {
            range,
            min_readings,
            count: 0,
            sum: 0.0,
            estimate: initial,
        }
    }

    /// Valid samples collected since the last publish.
    pub fn pending(&self) -> u32 {
        self.count
    }
}

impl ReadingFilter for WindowedAverage {
    fn sense(&mut self, reading: f32) -> bool {
        if !self.range.contains(reading) {
            return false;
        }
        self.count = self.count.saturating_add(1);
        self.sum += reading;
        true
    }

    fn publish(&mut self) -> Option<f32> {
        if self.count <= self.min_readings || self.count == 0 {
            return None;
        }
        self.estimate = self.sum / self.count as f32;
        self.count = 0;
        self.sum = 0.0;
        Some(self.estimate)
    }

    fn estimate(&self) -> f32 {
        self.estimate
    }
}
