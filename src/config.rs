//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::Preset;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8091".to_string(),
        "http://127.0.0.1:8091".to_string(),
    ]
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard projection settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Fixed seed for synthetic history. Unset draws a fresh seed per request.
    #[serde(default)]
    pub history_seed: Option<u64>,

    /// History range used when a request names none (7, 30, 90 or 365)
    #[serde(default = "default_history_days")]
    pub default_history_days: u32,
}

fn default_history_days() -> u32 {
    Preset::DEFAULT.days()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            history_seed: None,
            default_history_days: default_history_days(),
        }
    }
}

impl DashboardConfig {
    pub fn default_preset(&self) -> Preset {
        Preset::from_days(self.default_history_days).unwrap_or(Preset::DEFAULT)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

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

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("petrodash").join("config.toml")),
            Some(PathBuf::from("/etc/petrodash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Preset::from_days(self.dashboard.default_history_days).is_err() {
            return Err(ConfigError::Invalid(format!(
                "dashboard.default_history_days must be 7, 30, 90 or 365 (got {})",
                self.dashboard.default_history_days
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        // API overrides
        if let Some(host) = lookup("PETRODASH_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("PETRODASH_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid PETRODASH_API_PORT: {}", port),
            }
        }

        // Dashboard overrides
        if let Some(seed) = lookup("PETRODASH_HISTORY_SEED") {
            match seed.parse() {
                Ok(s) => self.dashboard.history_seed = Some(s),
                Err(_) => tracing::warn!("Ignoring invalid PETRODASH_HISTORY_SEED: {}", seed),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("PETRODASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PETRODASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Petrodash Configuration
#
# Environment variables override these settings:
# - PETRODASH_API_HOST
# - PETRODASH_API_PORT
# - PETRODASH_HISTORY_SEED
# - PETRODASH_LOG_LEVEL
# - PETRODASH_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins
cors_origins = ["http://localhost:8091", "http://127.0.0.1:8091"]

# Request timeout in seconds
request_timeout_secs = 30

[dashboard]
# Fixed seed for the synthetic production history.
# Leave unset for a fresh series on every request.
# history_seed = 42

# Default history range in days: 7, 30, 90 or 365
default_history_days = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
