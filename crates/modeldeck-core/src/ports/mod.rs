//! Port traits and core-owned DTOs.
//!
//! Ports define the interfaces the domain uses to reach the outside world.
//! Implementations live in adapter crates (`modeldeck-hub`, `modeldeck-ollama`,
//! `modeldeck-store`); no implementation detail leaks through these types.

pub mod hub;
pub mod ollama;
pub mod settings_repository;

use thiserror::Error;

pub use hub::{
    HubClientPort, HubModel, HubModelDetail, HubPortError, HubPortResult, ListModelsQuery,
    ModelPage, SortField,
};
pub use ollama::{
    ConnectionProbe, LocalModel, OllamaClientPort, ProbeStatus, PullOutcome, PullStatus,
};
pub use settings_repository::SettingsRepository;

/// Errors from repository/storage operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Top-level domain error for core services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// External service error.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_converts_to_core_error() {
        let err: CoreError = RepositoryError::Storage("disk full".to_string()).into();
        assert!(err.to_string().contains("disk full"));
    }
}
