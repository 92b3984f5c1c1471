//! Constants used throughout the application
//!
//! This module centralizes magic strings and default values to keep the
//! config, storage and routing layers consistent.

/// Body returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "API SafeAlert está ativa!";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "safealert";
/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://safealert.db?mode=rwc";
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Upper bound accepted by config validation
pub const MAX_CONNECTIONS_LIMIT: u32 = 100;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Collection paths
pub const USUARIOS_PATH: &str = "usuarios";
pub const LOCALIDADES_PATH: &str = "localidades";
pub const EVENTOS_PATH: &str = "eventos";
pub const POSTAGENS_PATH: &str = "postagens";
pub const OCORRENCIAS_PATH: &str = "ocorrencias";

// Log Messages
pub const LOG_SCHEMA_READY: &str = "✅ Database schema ready";
pub const LOG_SERVER_LISTENING: &str = "✅ SafeAlert API listening on";
pub const LOG_SHUTDOWN: &str = "Shutdown signal received, stopping server";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
