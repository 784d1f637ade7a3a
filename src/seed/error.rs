//! Seed errors

use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A seed step failed; `context` names the step and row
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: RepositoryError,
    },

    #[error("Missing seed prerequisite: {0}")]
    MissingData(String),
}

impl From<sqlx::Error> for SeedError {
    fn from(e: sqlx::Error) -> Self {
        SeedError::Repository(RepositoryError::Database(e))
    }
}

/// Wrap a repository failure once with the step that produced it
pub trait SeedContext<T> {
    fn context(self, context: &str) -> Result<T, SeedError>;

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T, SeedError>;
}

impl<T> SeedContext<T> for Result<T, RepositoryError> {
    fn context(self, context: &str) -> Result<T, SeedError> {
        self.map_err(|source| SeedError::Context {
            context: context.to_string(),
            source,
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T, SeedError> {
        self.map_err(|source| SeedError::Context {
            context: f(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_context_wraps_once() {
        let id = Uuid::new_v4();
        let result: Result<(), RepositoryError> = Err(RepositoryError::NotFound { table: "banks", id });

        let err = result.with_context(|| "failed to destroy bank HSBC".to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("failed to destroy bank HSBC: banks not found: {}", id)
        );
        assert!(matches!(err, SeedError::Context { .. }));
    }
}
