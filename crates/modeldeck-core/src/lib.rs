//! Core domain types and port definitions for modeldeck.
//!
//! This crate holds the types that cross crate boundaries: the normalized
//! model representations returned to API consumers, the port traits that
//! adapter crates implement, the settings domain, and the shared error
//! taxonomy. It has no HTTP or storage dependencies of its own.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::DownloadReceipt;
pub use ports::{
    ConnectionProbe, CoreError, HubClientPort, HubModel, HubModelDetail, HubPortError,
    HubPortResult, ListModelsQuery, LocalModel, ModelPage, OllamaClientPort, ProbeStatus,
    PullOutcome, PullStatus, RepositoryError, SettingsRepository, SortField,
};
pub use services::DownloadSimulator;
pub use settings::{
    DEFAULT_MODEL_DIRECTORY, Settings, SettingsError, SettingsUpdate, validate_settings,
};

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use tokio_test as _;
