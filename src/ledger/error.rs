//! Ledger errors

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Branch setting not found for branch {0}")]
    BranchSettingNotFound(Uuid),

    #[error("Invalid date range: {to} is before {from}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for LedgerError {
    fn from(e: sqlx::Error) -> Self {
        LedgerError::Repository(RepositoryError::Database(e))
    }
}
