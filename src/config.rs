//! Application configuration
//!
//! Loaded from a TOML file. Every key is optional; anything missing takes the
//! default below.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [database]
//! url = "sqlite://./salon.db?mode=rwc"
//!
//! [security]
//! jwt_secret = "..."
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::shared::errors::ConfigError;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "SALON_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./salon.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_hours: 24,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Demo data inserted into an empty database on startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub owner_email: String,
    pub owner_password: String,
    pub owner_first_name: String,
    pub owner_last_name: String,
    /// Shared password for the seeded employees and client
    pub staff_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            owner_email: "vlasnica@salon.rs".to_string(),
            owner_password: "vlasnica123".to_string(),
            owner_first_name: "Jelena".to_string(),
            owner_last_name: "Marković".to_string(),
            staff_password: "lozinka123".to_string(),
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing or broken file yields the
    /// defaults. Errors other than a missing file are logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                error!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.jwt_secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "security.jwt_secret",
                reason: "must not be empty".to_string(),
            });
        }
        if self.security.jwt_expiration_hours <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "security.jwt_expiration_hours",
                reason: "must be > 0".to_string(),
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections",
                reason: "must be > 0".to_string(),
            });
        }
        if !matches!(self.logging.format.to_lowercase().as_str(), "text" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be text or json".to_string(),
            });
        }
        Ok(())
    }
}

/// `~/.config/salon-service/config.toml`, or `./config.toml` when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("salon-service").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Explicit path, then `SALON_CONFIG`, then the default location.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(default_config_path)
}
