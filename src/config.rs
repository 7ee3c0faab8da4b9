use std::{io::ErrorKind, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tokio::time::Duration;

use crate::page::advice::DEFAULT_WHATSAPP_NUMBER;

pub const CONFIG_ENV: &str = "STORE_STATUS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not deserialize.\n{0}")]
    Parse(#[from] serde_json::Error),

    #[error("refresh_interval_ms must be greater than zero")]
    ZeroInterval,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    pub refresh_interval_ms: u64,
    pub whatsapp_number: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:7878".to_string(),
            refresh_interval_ms: 60_000,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }
}

impl Config {
    pub fn from_config(config: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(config)?;
        if config.refresh_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(config)
    }

    /// Reads the config file, or uses the defaults when there is none.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_config(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}
