use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/uisketch/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("uisketch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates an explicit config file.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both bind addresses parse as socket addresses
    /// - An enabled remote endpoint is an http(s) URL
    /// - Timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bind_addr("server.bind_addr", &self.server.bind_addr)?;
        validate_bind_addr("backend.bind_addr", &self.backend.bind_addr)?;

        let endpoint = &self.remote.endpoint;
        let is_http = endpoint.starts_with("http://") || endpoint.starts_with("https://");
        if self.remote.enabled && !is_http {
            return Err(ConfigError::ValidationError {
                message: format!("remote.endpoint must be an http(s) URL, got '{}'", endpoint),
            });
        }

        if self.remote.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "remote.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.remote.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "remote.connect_timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_bind_addr(field: &str, value: &str) -> Result<(), ConfigError> {
    value
        .parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|_| ConfigError::ValidationError {
            message: format!("{} must be a host:port socket address, got '{}'", field, value),
        })
}
