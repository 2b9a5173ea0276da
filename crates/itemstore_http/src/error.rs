//! HTTP error types.
//!
//! `ApiError` is what handlers return; it owns the status code and JSON body
//! mapping. `ServerError` covers process startup failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use itemstore_core::db::DbError;
use itemstore_core::{ItemId, RepoError};
use log::error;
use serde::Serialize;
use thiserror::Error;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// No row matches the requested id
    #[error("Item not found")]
    NotFound(ItemId),

    /// Payload passed shape checks but violates a field bound
    #[error("{0}")]
    Validation(String),

    /// Storage unavailable or failed mid-statement
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => ApiError::NotFound(id),
            RepoError::Validation(err) => ApiError::Validation(err.to_string()),
            RepoError::Db(err) => ApiError::from(err),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ApiError::Internal(cause) => {
                error!("event=request_failed module=http status=error error={cause}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Startup errors for the HTTP server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("cannot bind listen address `{addr}`: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage bootstrap failed: {0}")]
    Storage(#[from] DbError),

    #[error("startup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemstore_core::ItemValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("disk".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repo_error_mapping() {
        let not_found = ApiError::from(RepoError::NotFound(9));
        assert!(matches!(not_found, ApiError::NotFound(9)));
        assert_eq!(not_found.to_string(), "Item not found");

        let validation = ApiError::from(RepoError::Validation(
            ItemValidationError::NameTooLong {
                max: 256,
                actual: 300,
            },
        ));
        assert!(matches!(validation, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let response = ApiError::Internal("secret path".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"detail":"Internal server error"}"#);
        assert!(!body.contains("secret path"));
    }
}
