use serde::{Deserialize, Serialize};

use crate::render::OutputMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Settings for the interactive editor server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the editor (host:port).
    #[serde(default = "default_server_bind_addr")]
    pub bind_addr: String,
    /// Prompt generated when a session starts.
    #[serde(default = "default_initial_prompt")]
    pub initial_prompt: String,
    /// Output mode a new session opens in.
    #[serde(default)]
    pub default_mode: OutputMode,
}

/// Remote generation service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// When false, generation is always local.
    #[serde(default = "default_remote_enabled")]
    pub enabled: bool,
    /// Full URL that accepts `POST {"text": ...}`.
    #[serde(default = "default_remote_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 3).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings for the bundled generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_bind_addr")]
    pub bind_addr: String,
}

fn default_server_bind_addr() -> String {
    "127.0.0.1:7878".to_string()
}

fn default_initial_prompt() -> String {
    "Login form".to_string()
}

fn default_remote_enabled() -> bool {
    true
}

fn default_remote_endpoint() -> String {
    "http://127.0.0.1:8000/generate-ui/".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    3
}

fn default_backend_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_server_bind_addr(),
            initial_prompt: default_initial_prompt(),
            default_mode: OutputMode::default(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: default_remote_enabled(),
            endpoint: default_remote_endpoint(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_backend_bind_addr(),
        }
    }
}
