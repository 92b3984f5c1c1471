//! SafeAlert - CRUD HTTP API for extreme-event alerts
//!
//! This library exposes users, localities, event types, posts and
//! occurrences over a REST interface backed by SQLite. Deleting a user,
//! locality or event type removes the posts filed under it, and deleting a
//! post removes its occurrences.
//!
//! # Modules
//!
//! * [`api`] - axum router, handlers and server loop
//! * [`config`] - Application configuration management
//! * [`dto`] - Views returned to callers and inputs accepted from them
//! * [`entities`] - SeaORM entity models
//! * [`repositories`] - Per-entity database operations
//! * [`storage`] - Connection pool and schema setup

/// HTTP routing layer
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Transfer shapes for the HTTP layer
pub mod dto;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Database connection and schema
pub mod storage;

/// Utility functions for date/time handling
pub mod utils;

// Re-export entity models for convenient access
pub use entities::{evento, localidade, ocorrencia, postagem, usuario};
