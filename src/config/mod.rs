//! Configuration management
//!
//! Handles loading and validation of configuration from TOML files,
//! with per-subsystem sections and serde defaults so a partial file
//! (or none at all) yields a working engine.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::gesture::{GestureConfig, Viewport};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gesture thresholds and timings
    #[serde(default)]
    pub gesture: GestureConfig,

    /// Viewport dimensions for exit transforms
    #[serde(default)]
    pub viewport: Viewport,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format ("pretty", "compact", "json")
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges
    pub fn validate(&self) -> Result<()> {
        if self.gesture.threshold_x <= 0.0 || self.gesture.threshold_y <= 0.0 {
            bail!("swipe thresholds must be positive distances");
        }
        if self.gesture.settle_ms == 0 {
            bail!("settle duration must be non-zero");
        }
        if !self.gesture.rotation_factor.is_finite() {
            bail!("rotation factor must be finite");
        }
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            bail!("viewport dimensions must be positive");
        }
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => bail!("unknown log level: {}", other),
        }
        Ok(())
    }
}
