//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::api::dto::InvalidResponse;
use crate::dashboard::DashboardError;
use crate::forms::{FormError, UploadError};

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form validation or submission error
    #[error(transparent)]
    Form(#[from] FormError),

    /// Rejected upload
    #[error("Upload rejected: {0}")]
    Upload(#[from] UploadError),

    /// Bad dashboard selector
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] DashboardError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Inline field errors are an expected outcome, not a failure
        if let ApiError::Form(FormError::Invalid(errors)) = self {
            let body = InvalidResponse {
                status: "invalid".to_string(),
                errors,
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
        }

        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Form(e) => match e {
                FormError::UnknownForm(_) => (StatusCode::NOT_FOUND, "FORM_NOT_FOUND"),
                FormError::Sink(_) => (StatusCode::SERVICE_UNAVAILABLE, "SUBMISSION_FAILED"),
                FormError::Decode(_) | FormError::Invalid(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "RECORD_ERROR")
                }
            },
            ApiError::Upload(_) => (StatusCode::BAD_REQUEST, "UPLOAD_REJECTED"),
            ApiError::Dashboard(e) => match e {
                DashboardError::UnknownView(_) => (StatusCode::NOT_FOUND, "VIEW_NOT_FOUND"),
                _ => (StatusCode::BAD_REQUEST, "INVALID_SELECTION"),
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
