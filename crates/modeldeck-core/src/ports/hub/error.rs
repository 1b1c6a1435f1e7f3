//! Error types for Hub port operations.

use thiserror::Error;

/// Errors from Hub port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum HubPortError {
    /// The requested model was not found.
    #[error("Model not found: {model_id}")]
    ModelNotFound {
        /// The model ID that wasn't found
        model_id: String,
    },

    /// The upstream API answered with a non-success status.
    #[error("Hub returned status {status}: {detail}")]
    UpstreamStatus {
        /// HTTP status code reported by the upstream
        status: u16,
        /// Detail text extracted from the upstream response
        detail: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The upstream body could not be decoded.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for Hub port operations.
pub type HubPortResult<T> = Result<T, HubPortError>;
