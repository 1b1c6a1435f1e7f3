//! Core-owned DTOs for Ollama operations.
//!
//! Connectivity checks answer a question ("is it reachable?"), so failures
//! are values here, not errors: every operation yields a status/message pair
//! or a best-effort list.

use serde::{Deserialize, Serialize};

/// Outcome status of a connectivity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Success,
    Failure,
}

/// Result of probing an Ollama server for reachability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProbe {
    pub status: ProbeStatus,
    /// Human-readable diagnostic
    pub message: String,
}

impl ConnectionProbe {
    /// Build a success outcome.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Success,
            message: message.into(),
        }
    }

    /// Build a failure outcome.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Failure,
            message: message.into(),
        }
    }
}

/// Outcome status of a model pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullStatus {
    Success,
    /// The model was already present on the server
    SuccessAlreadyExists,
    Failure,
}

/// Result of asking an Ollama server to pull a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullOutcome {
    pub status: PullStatus,
    pub message: String,
}

impl PullOutcome {
    /// Build a success outcome.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: PullStatus::Success,
            message: message.into(),
        }
    }

    /// Build an already-exists outcome.
    #[must_use]
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self {
            status: PullStatus::SuccessAlreadyExists,
            message: message.into(),
        }
    }

    /// Build a failure outcome.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: PullStatus::Failure,
            message: message.into(),
        }
    }
}

/// A model installed on an Ollama server.
///
/// Direct passthrough of the `/api/tags` record subset the frontend uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalModel {
    pub name: String,
    pub modified_at: Option<String>,
    pub size: Option<u64>,
    pub digest: Option<String>,
}
