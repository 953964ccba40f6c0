//! Elapsed-time gates for the control loop.
//!
//! The loop has three independent cadences: sense, publish, decide.
//! Each is a [`PeriodicTimer`] polled once per tick against the injected
//! monotonic clock.  A timer fires when `now - last >= period`; missed
//! periods are skipped, never caught up, and there is no drift
//! compensation: the next period counts from the tick that fired.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct PeriodicTimer {
    period_ms: u64,
    last_fire_ms: u64,
}

impl PeriodicTimer {
    /// A new timer whose first period starts at `now_ms`.
    pub fn new(period_ms: u64, now_ms: u64) -> Self {
        Self {
            period_ms,
            last_fire_ms: now_ms,
        }
    }

    /// True if a full period has elapsed since the last fire.
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.wrapping_sub(self.last_fire_ms) >= self.period_ms
    }

    /// Fire if due, restarting the period from `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.is_due(now_ms) {
            self.last_fire_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Restart the period from `now_ms` without checking.
    pub fn restart(&mut self, now_ms: u64) {
        self.last_fire_ms = now_ms;
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }
}

/// Periods for the three loop cadences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopPeriods {
    pub sense_ms: u64,
    /// 0 = check for a publishable estimate on every tick.
    pub publish_ms: u64,
    pub decide_ms: u64,
}

/// The three loop timers, owned by the service.
#[derive(Debug, Clone, Copy)]
pub struct LoopTimers {
    pub sense: PeriodicTimer,
    pub publish: PeriodicTimer,
    pub decide: PeriodicTimer,
}

impl LoopTimers {
    pub fn new(periods: &LoopPeriods, now_ms: u64) -> Self {
        Self {
            sense: PeriodicTimer::new(periods.sense_ms, now_ms),
            publish: PeriodicTimer::new(periods.publish_ms, now_ms),
            decide: PeriodicTimer::new(periods.decide_ms, now_ms),
        }
    }
}
