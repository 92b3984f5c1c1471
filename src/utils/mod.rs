//! Utility modules for the SafeAlert service.
//!
//! - [`datetime`] - Timestamp helpers shared by the entities and the mapper

pub mod datetime;
