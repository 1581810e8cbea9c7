//! HTTP error handling and response types.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::RepositoryError;
use crate::transformations::FilterError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Query string that could not be decoded at all
    InvalidQuery(QueryRejection),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::InvalidQuery(rejection) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", "Invalid query string")
                    .with_details(rejection.body_text()),
            ),
            AppError::Repository(e) if e.is_not_found() => {
                let message = match &e {
                    RepositoryError::NotFound { message, .. } => message.clone(),
                    _ => e.to_string(),
                };
                (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
            }
            AppError::Repository(e) if e.is_data_unavailable() => {
                // Cause goes to the log only; callers get the generic condition.
                tracing::error!("Planet data unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiError::new("DATA_UNAVAILABLE", "Planet data unavailable"),
                )
            }
            AppError::Repository(e) => {
                tracing::error!("Repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("REPOSITORY_ERROR", "Internal server error"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidQuery(rejection)
    }
}

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Repository(RepositoryError::data_unavailable("missing file")),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Repository(RepositoryError::parse("row 3")),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Repository(RepositoryError::not_found("K1")),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Repository(RepositoryError::internal("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_api_error_skips_empty_details() {
        let json = serde_json::to_value(ApiError::new("BAD_REQUEST", "nope")).unwrap();
        assert!(json.get("details").is_none());

        let json =
            serde_json::to_value(ApiError::new("BAD_REQUEST", "nope").with_details("page")).unwrap();
        assert_eq!(json["details"], "page");
    }
}
