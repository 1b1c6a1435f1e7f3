//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies.
//! Persistence is handled by the `SettingsRepository` port.

use serde::{Deserialize, Serialize};

/// Default directory for simulated model downloads.
pub const DEFAULT_MODEL_DIRECTORY: &str = "downloaded_models/";

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory that simulated downloads are placed under.
    pub model_directory: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            model_directory: Some(DEFAULT_MODEL_DIRECTORY.to_string()),
        }
    }

    /// Get the effective model directory (with default fallback).
    #[must_use]
    pub fn effective_model_directory(&self) -> &str {
        self.model_directory
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL_DIRECTORY)
    }

    /// Merge an update into this settings, only touching fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref dir) = other.model_directory {
            self.model_directory.clone_from(dir);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub model_directory: Option<Option<String>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Model directory cannot be empty")]
    EmptyModelDirectory,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings
        .model_directory
        .as_ref()
        .is_some_and(|p| p.trim().is_empty())
    {
        return Err(SettingsError::EmptyModelDirectory);
    }

    Ok(())
}
