//! Repository errors

use thiserror::Error;
use uuid::Uuid;

/// Errors returned by [`crate::repository::Repository`]
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{table} not found: {id}")]
    NotFound { table: &'static str, id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::NotFound { .. } | RepositoryError::Database(sqlx::Error::RowNotFound)
        )
    }
}
