//! HTTP layer for the SafeAlert API.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  router / resource (axum handlers)           │
//! │  - path and JSON body decoding               │
//! │  - status codes, Location header             │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  dto (views and inputs)                      │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  repositories (transactions, cascades)       │
//! └──────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod extract;
pub mod resource;
pub mod router;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use server::serve;
pub use state::AppState;
