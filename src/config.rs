//! Configuration management for SafeAlert
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DATABASE_URL, DEFAULT_HOST, DEFAULT_LOG_LEVEL,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT, MAX_CONNECTIONS_LIMIT,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g. "sqlite://safealert.db?mode=rwc" or "sqlite::memory:")
    pub url: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Optional file to append log lines to, in addition to stdout
    pub file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from an explicit file, the default location, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        if let Some(path) = Self::find_config_file() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// The default config file, when one has been written there
    fn find_config_file() -> Option<PathBuf> {
        Self::get_default_config_path().ok().filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            anyhow::bail!("server.host cannot be empty");
        }
        if self.server.port == 0 {
            anyhow::bail!("server.port must be greater than 0");
        }

        if self.database.url.is_empty() {
            anyhow::bail!("database.url cannot be empty");
        }
        if !self.database.url.starts_with("sqlite:") {
            anyhow::bail!("database.url must be a sqlite URL, got '{}'", self.database.url);
        }
        if self.database.max_connections == 0 || self.database.max_connections > MAX_CONNECTIONS_LIMIT {
            anyhow::bail!(
                "database.max_connections must be between 1 and {}, got {}",
                MAX_CONNECTIONS_LIMIT,
                self.database.max_connections
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# SafeAlert Configuration File\n# Generated on {}\n\n",
            datetime::format_timestamp(datetime::now())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
