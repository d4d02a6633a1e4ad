//! API error handling
//!
//! Every failure leaves the API as `{ "error": ..., "code": ... }`. Internal
//! errors are logged and answered with a generic message.

use application::{ApplicationError, ProviderError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Weather provider quota exceeded")]
    QuotaExceeded,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "place_not_found",
            Self::QuotaExceeded => "quota_exceeded",
            Self::ServiceUnavailable(_) => "provider_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::ServiceUnavailable(msg) => {
                msg.clone()
            },
            Self::QuotaExceeded => self.to_string(),
            Self::Internal(msg) => {
                error!(error = %msg, "Request failed");
                "An internal error occurred".to_string()
            },
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) if e.is_user_input() => Self::BadRequest(e.to_string()),
            ApplicationError::PlaceNotFound(name) => {
                Self::NotFound(format!("Unknown place: {name}"))
            },
            ApplicationError::Provider(ProviderError::QuotaExceeded) => Self::QuotaExceeded,
            ApplicationError::Provider(e) => Self::ServiceUnavailable(e.to_string()),
            ApplicationError::Domain(e) => Self::Internal(e.to_string()),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}
