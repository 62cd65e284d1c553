//! JSON file backend for [`ConfigPort`].
//!
//! A missing file is not an error: the defaults are returned.  Every field
//! is range-checked on load and before anything is written.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::{SystemConfig, validate_config};

#[derive(Debug, Clone)]
pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("config: {} not found, using defaults", self.path.display());
                return Ok(SystemConfig::default());
            }
            Err(e) => {
                warn!("config: reading {} failed: {}", self.path.display(), e);
                return Err(ConfigError::IoError);
            }
        };

        let cfg: SystemConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("config: {} is not valid: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;
        validate_config(&cfg)?;
        info!("config: loaded {}", self.path.display());
        Ok(cfg)
    }

    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError> {
        validate_config(config)?;
        let json = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        fs::write(&self.path, json).map_err(|e| {
            warn!("config: writing {} failed: {}", self.path.display(), e);
            ConfigError::IoError
        })?;
        info!("config: saved {}", self.path.display());
        Ok(())
    }
}
