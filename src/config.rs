//! System configuration parameters
//!
//! All tunable parameters for the device core and the simulated producer.
//! Values can be overridden from a JSON file via
//! [`JsonConfigFile`](crate::adapters::config_file::JsonConfigFile).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::pins::{self, PinId};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- LED ---
    /// GPIO line driving the LED.
    pub led_gpio: PinId,

    // --- Sensor ---
    /// `try_lock` attempts made by the interrupt-context update path before
    /// a sample is dropped.
    pub isr_lock_retries: u8,

    // --- Simulated producer ---
    /// Delay between simulated samples (milliseconds)
    pub sim_sample_interval_ms: u32,
    /// Lowest value the simulated sensor emits
    pub sim_sample_min: i32,
    /// Highest value the simulated sensor emits
    pub sim_sample_max: i32,
    /// Seed for the simulated sensor sequence
    pub sim_seed: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            led_gpio: pins::LED_GPIO,

            isr_lock_retries: 8,

            sim_sample_interval_ms: 500,
            sim_sample_min: -40,
            sim_sample_max: 125,
            sim_seed: 0x5EED_0017,
        }
    }
}

/// Range-check every field. Invalid configs are rejected, never clamped.
pub fn validate_config(cfg: &SystemConfig) -> Result<(), ConfigError> {
    if cfg.led_gpio.number() < 0 {
        return Err(ConfigError::ValidationFailed("led_gpio must be >= 0"));
    }
    if cfg.isr_lock_retries == 0 {
        return Err(ConfigError::ValidationFailed("isr_lock_retries must be >= 1"));
    }
    if !(1..=60_000).contains(&cfg.sim_sample_interval_ms) {
        return Err(ConfigError::ValidationFailed(
            "sim_sample_interval_ms must be 1–60000",
        ));
    }
    if cfg.sim_sample_min > cfg.sim_sample_max {
        return Err(ConfigError::ValidationFailed(
            "sim_sample_min must not exceed sim_sample_max",
        ));
    }
    Ok(())
}
