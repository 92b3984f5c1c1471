use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failures reported by the repository layer
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        RepositoryError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

impl From<DbErr> for RepositoryError {
    fn from(error: DbErr) -> Self {
        match error.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => RepositoryError::ForeignKeyViolation(message),
            _ => RepositoryError::Database(error),
        }
    }
}
