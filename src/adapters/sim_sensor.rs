//! Deterministic simulated sensor.
//!
//! Emits pseudo-random samples in `[min, max]` from a 32-bit LCG so runs
//! are reproducible for a given seed.

use crate::app::ports::SampleSource;
use crate::config::SystemConfig;

// Numerical Recipes LCG constants.
const LCG_MUL: u32 = 1_664_525;
const LCG_INC: u32 = 1_013_904_223;

#[derive(Debug, Clone)]
pub struct SimSensor {
    state: u32,
    min: i32,
    span: u64,
    remaining: Option<u64>,
}

impl SimSensor {
    /// Endless source over `[min, max]`.  `min > max` is swapped.
    pub fn new(seed: u32, min: i32, max: i32) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = (i64::from(hi) - i64::from(lo)) as u64 + 1;
        Self {
            state: seed,
            min: lo,
            span,
            remaining: None,
        }
    }

    pub fn from_config(cfg: &SystemConfig) -> Self {
        Self::new(cfg.sim_seed, cfg.sim_sample_min, cfg.sim_sample_max)
    }

    /// Stop after `n` samples.
    #[must_use]
    pub fn take(mut self, n: u64) -> Self {
        self.remaining = Some(n);
        self
    }
}

impl SampleSource for SimSensor {
    #[allow(clippy::cast_possible_wrap)]
    fn next_sample(&mut self) -> Option<i32> {
        if let Some(left) = self.remaining.as_mut() {
            if *left == 0 {
                return None;
            }
            *left -= 1;
        }
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        let offset = u64::from(self.state) % self.span;
        Some((i64::from(self.min) + offset as i64) as i32)
    }
}
