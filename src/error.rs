//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::ledger::LedgerError;
use crate::model::ValidationError;
use crate::repository::RepositoryError;
use crate::seed::SeedError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing required header: {0}")]
    MissingHeader(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Layer errors
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    // Server errors (5xx)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

fn repository_status(e: &RepositoryError) -> (StatusCode, &'static str, Option<String>) {
    match e {
        RepositoryError::NotFound { table, id } => {
            (StatusCode::NOT_FOUND, "not_found", Some(format!("{} {}", table, id)))
        }
        RepositoryError::Database(sqlx::Error::RowNotFound) => {
            (StatusCode::NOT_FOUND, "not_found", None)
        }
        RepositoryError::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            (StatusCode::CONFLICT, "duplicate", Some(db.message().to_string()))
        }
        RepositoryError::Database(e) => {
            tracing::error!("Database error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", Some(msg.clone()))
            }
            AppError::MissingHeader(header) => {
                (StatusCode::BAD_REQUEST, "missing_header", Some(header.clone()))
            }
            AppError::InvalidHeader(header) => {
                (StatusCode::BAD_REQUEST, "invalid_header", Some(header.clone()))
            }
            AppError::Validation(e) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_failed", Some(e.field.to_string()))
            }

            AppError::Repository(e) => repository_status(e),

            AppError::Ledger(e) => match e {
                LedgerError::BranchSettingNotFound(branch_id) => (
                    StatusCode::NOT_FOUND,
                    "branch_setting_not_found",
                    Some(branch_id.to_string()),
                ),
                LedgerError::InvalidRange { .. } => {
                    (StatusCode::BAD_REQUEST, "invalid_range", None)
                }
                LedgerError::Repository(e) => repository_status(e),
            },

            AppError::Seed(e) => match e {
                SeedError::MissingData(what) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "seed_prerequisite_missing", Some(what.clone()))
                }
                SeedError::Context { source, .. } if source.is_not_found() => {
                    (StatusCode::NOT_FOUND, "seed_failed", None)
                }
                other => {
                    tracing::error!("Seed error: {}", other);
                    (StatusCode::INTERNAL_SERVER_ERROR, "seed_failed", None)
                }
            },

            // 500 Internal Server Error
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::from(RepositoryError::NotFound {
            table: "banks",
            id: Uuid::new_v4(),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_422() {
        let err = AppError::from(ValidationError::new("name", "must be at least 1 characters"));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_ledger_errors() {
        let from = chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let to = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let err = AppError::from(LedgerError::InvalidRange { from, to });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = AppError::from(LedgerError::BranchSettingNotFound(Uuid::new_v4()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_header_maps_to_400() {
        let err = AppError::MissingHeader("X-Branch-Id".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
