//! Internal error types for Hub operations.
//!
//! These errors are internal to `modeldeck-hub` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for Hub operations.
pub type HubResult<T> = Result<T, HubError>;

/// Errors related to Hub API operations.
#[derive(Debug, Error)]
pub enum HubError {
    /// API request completed with a non-success HTTP status.
    #[error("Hub API request failed with status {status} for {url}: {detail}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Body excerpt or status text
        detail: String,
    },

    /// The requested model was not found.
    #[error("Model '{model_id}' not found on the Hub")]
    ModelNotFound {
        /// The model ID that was not found
        model_id: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Hub API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
