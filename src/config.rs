//! Configuration management for Floodgate.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{FloodError, Result};

/// Flood control configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloodConfig {
    /// Trailing window in seconds
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Maximum calls admitted within the window
    #[serde(default = "default_max_calls")]
    pub max_calls: u64,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            max_calls: default_max_calls(),
        }
    }
}

fn default_window_secs() -> u64 {
    10
}

fn default_max_calls() -> u64 {
    5
}

impl FloodConfig {
    /// The trailing window as a duration.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: FloodConfig =
            serde_yaml::from_str(&contents).map_err(|e| FloodError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for unusable values.
    pub fn validate(&self) -> Result<()> {
        if self.window_secs == 0 {
            return Err(FloodError::Config(
                "window_secs must be greater than zero".to_string(),
            ));
        }
        if self.max_calls == 0 {
            return Err(FloodError::Config(
                "max_calls must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
