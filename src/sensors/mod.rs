//! Sensor subsystem: running statistics and the lock-protected
//! [`SensorAggregator`] that producers feed.
//!
//! Readers take the mutex.  Producers running in thread context call
//! [`SensorAggregator::update`] and may block briefly; producers running in
//! interrupt-like context call [`SensorAggregator::update_from_isr`], which
//! never blocks and drops the sample if the lock stays contended.

pub mod stats;

use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use log::debug;

pub use stats::SensorStats;

/// `try_lock` attempts made by [`SensorAggregator::update_from_isr`] when no
/// explicit budget is configured.
pub const DEFAULT_ISR_LOCK_RETRIES: u8 = 8;

pub struct SensorAggregator {
    stats: Mutex<SensorStats>,
    dropped: AtomicU64,
    isr_lock_retries: u8,
}

impl SensorAggregator {
    /// Empty aggregator.  `isr_lock_retries` of 0 is treated as 1.
    pub fn new(isr_lock_retries: u8) -> Self {
        Self {
            stats: Mutex::new(SensorStats::new()),
            dropped: AtomicU64::new(0),
            isr_lock_retries: isr_lock_retries.max(1),
        }
    }

    // ── Readers ───────────────────────────────────────────────

    pub fn read_current(&self) -> i32 {
        self.lock().current
    }

    pub fn read_minimum(&self) -> i32 {
        self.lock().minimum
    }

    pub fn read_maximum(&self) -> i32 {
        self.lock().maximum
    }

    /// Truncating mean; `0` before the first sample.
    pub fn read_average(&self) -> i32 {
        self.lock().average()
    }

    /// Copy of the whole record taken under a single lock acquisition.
    pub fn snapshot(&self) -> SensorStats {
        *self.lock()
    }

    // ── Producers ─────────────────────────────────────────────

    /// Fold `sample` into the record, blocking until the lock is free.
    pub fn update(&self, sample: i32) {
        self.lock().record(sample);
    }

    /// Non-blocking update for interrupt-like callers.
    ///
    /// Makes at most `isr_lock_retries` `try_lock` attempts.  Returns `false`
    /// and bumps [`dropped_samples`](Self::dropped_samples) if every attempt
    /// found the lock held.
    pub fn update_from_isr(&self, sample: i32) -> bool {
        for _ in 0..self.isr_lock_retries {
            match self.stats.try_lock() {
                Ok(mut stats) => {
                    stats.record(sample);
                    return true;
                }
                Err(TryLockError::Poisoned(poisoned)) => {
                    poisoned.into_inner().record(sample);
                    return true;
                }
                Err(TryLockError::WouldBlock) => core::hint::spin_loop(),
            }
        }
        let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("sensor sample {} dropped (lock contended, {} total)", sample, dropped);
        false
    }

    /// Samples discarded by [`update_from_isr`](Self::update_from_isr).
    pub fn dropped_samples(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, SensorStats> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SensorAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_ISR_LOCK_RETRIES)
    }
}
