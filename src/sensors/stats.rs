//! Running sample statistics.
//!
//! Pure fold: no locking, no I/O.  [`SensorAggregator`](super::SensorAggregator)
//! wraps one of these in a mutex.

use serde::Serialize;

/// Current/min/max plus the accumulators for the mean.
///
/// Until the first sample, `minimum`/`maximum` hold the opposite extrema of
/// `i32` so that any sample replaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorStats {
    pub current: i32,
    pub minimum: i32,
    pub maximum: i32,
    pub sum: i64,
    pub count: u64,
}

impl SensorStats {
    pub const EMPTY: Self = Self {
        current: 0,
        minimum: i32::MAX,
        maximum: i32::MIN,
        sum: 0,
        count: 0,
    };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Fold one sample into the record.
    pub fn record(&mut self, sample: i32) {
        self.current = sample;
        if sample < self.minimum {
            self.minimum = sample;
        }
        if sample > self.maximum {
            self.maximum = sample;
        }
        // Saturates only after ~4.3e9 samples pinned at an i32 extreme.
        self.sum = self.sum.saturating_add(i64::from(sample));
        self.count = self.count.saturating_add(1);
    }

    /// Mean of all samples, truncated toward zero; `0` before any sample.
    #[allow(clippy::cast_possible_wrap)]
    pub fn average(&self) -> i32 {
        if self.count == 0 {
            return 0;
        }
        // The mean of i32 samples always fits in i32.
        (self.sum / self.count as i64) as i32
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for SensorStats {
    fn default() -> Self {
        Self::EMPTY
    }
}
