use crate::error::{Result, ReviewError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;

/// Main configuration structure loaded from driver_review.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub directory: DirectoryConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5001".to_string(),
            request_timeout_ms: 10000,
        }
    }
}

/// Driver directory overrides
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Drop the built-in drivers and use only `drivers`
    pub replace_builtin: bool,
    pub drivers: Vec<DriverEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DriverEntry {
    pub id: i64,
    pub name: String,
    pub experience_years: u32,
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses DRIVER_REVIEW_CONFIG environment variable or defaults to "driver_review.toml"
    pub fn load() -> Result<Self> {
        // 1) DRIVER_REVIEW_ENV_FILE if set, else ./.env
        if let Ok(env_path) = std::env::var("DRIVER_REVIEW_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }

        let config_path = std::env::var("DRIVER_REVIEW_CONFIG")
            .unwrap_or_else(|_| "driver_review.toml".to_string());

        let mut config = Self::from_path_or_default(&config_path)?;

        if let Ok(bind) = std::env::var("DRIVER_REVIEW_BIND") {
            tracing::debug!("DRIVER_REVIEW_BIND env override applied");
            config.server.bind = bind;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a config file, falling back to defaults when it does not exist.
    pub fn from_path_or_default(path: &str) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Config file {} not found, using defaults", path);
                Ok(Self::default())
            }
            Err(e) => Err(ReviewError::config(format!("failed to read {}: {}", path, e))),
        }
    }

    /// Parse TOML; syntax and type errors surface as `ReviewError::Config`.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.server.request_timeout_ms == 0 {
            return Err(ReviewError::config("server.request_timeout_ms must be > 0"));
        }
        let mut seen = HashSet::new();
        for driver in &self.directory.drivers {
            if !seen.insert(driver.id) {
                return Err(ReviewError::config(format!(
                    "directory.drivers has duplicate id {}",
                    driver.id
                )));
            }
            if driver.name.trim().is_empty() {
                return Err(ReviewError::config(format!(
                    "directory.drivers entry {} has a blank name",
                    driver.id
                )));
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|e| {
            ReviewError::config(format!("invalid server.bind '{}': {}", self.server.bind, e))
        })
    }
}
