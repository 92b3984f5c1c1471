use sea_orm::DatabaseConnection;

use crate::storage::Storage;

/// Shared state handed to every handler through axum's `State` extractor
#[derive(Clone, Debug)]
pub struct AppState {
    pub storage: Storage,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Pooled connection used by the repositories
    pub fn db(&self) -> &DatabaseConnection {
        &self.storage.conn
    }
}
