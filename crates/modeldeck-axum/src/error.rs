//! Axum-specific error types and mappings.
//!
//! This module provides error types for the Axum adapter and mappings
//! from `CoreError` and `HubPortError` to HTTP status codes and response
//! bodies. Every handler error becomes a structured JSON body; nothing
//! here can take down the request-handling process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use modeldeck_core::{CoreError, HubPortError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream API answered, but with a failure status.
    #[error("Upstream failure: {0}")]
    BadGateway(String),

    /// Service unavailable (e.g., upstream unreachable).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "request failed");
        }

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<HubPortError> for HttpError {
    fn from(err: HubPortError) -> Self {
        match err {
            HubPortError::ModelNotFound { model_id } => {
                HttpError::NotFound(format!("Model '{model_id}' not found"))
            }
            HubPortError::UpstreamStatus { status, detail } => {
                HttpError::BadGateway(format!("Hub returned status {status}: {detail}"))
            }
            HubPortError::Network { message } => {
                HttpError::ServiceUnavailable(format!("Hub request failed: {message}"))
            }
            HubPortError::InvalidResponse { message } => {
                HttpError::Internal(format!("Could not decode Hub response: {message}"))
            }
            HubPortError::Configuration { message } => HttpError::BadRequest(message),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => {
                HttpError::Internal(format!("Serialization: {msg}"))
            }
        }
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Settings(settings_err) => HttpError::BadRequest(settings_err.to_string()),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::ExternalService(msg) => HttpError::ServiceUnavailable(msg),
            CoreError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}
