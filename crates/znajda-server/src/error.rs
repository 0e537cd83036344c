use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use znajda_core::AppError;

/// API error type that maps onto HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        });

        (status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match &err {
            AppError::DatasetNotFound(id) => {
                ApiError::NotFound(format!("Dataset not found: {}", id))
            }
            // Storage details stay in the logs, not in responses.
            AppError::Io(_) => ApiError::Internal("Storage error".to_string()),
            AppError::SerializationError(_) => {
                ApiError::Internal("Serialization error".to_string())
            }
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_not_found_maps_to_404() {
        let err: ApiError = AppError::DatasetNotFound("zbior".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Not found: Dataset not found: zbior");
    }

    #[test]
    fn test_io_error_hides_details() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/etc/secret");
        let err: ApiError = AppError::from(io).into();
        match err {
            ApiError::Internal(msg) => assert_eq!(msg, "Storage error"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
