//! Local storage module for SafeAlert data persistence
//!
//! This module owns the pooled SQLite connection and the table layout for:
//! - Usuarios
//! - Localidades
//! - Eventos
//! - Postagens
//! - Ocorrencias

pub mod db;

pub use db::Storage;
