//! JSON-file implementation of the settings repository port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use modeldeck_core::{RepositoryError, Settings, SettingsRepository};

/// Settings repository backed by a single JSON file.
///
/// Reads are tolerant: a missing or unreadable file yields default settings
/// without writing anything back. Writes replace the whole file; concurrent
/// writers are last-writer-wins, acceptable for single-operator usage.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Create a store for the given settings file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsStore {
    async fn load(&self) -> Result<Settings, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(Settings::with_defaults());
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "settings file unreadable, using defaults");
                return Ok(Settings::with_defaults());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "settings file corrupt, using defaults");
                Ok(Settings::with_defaults())
            }
        }
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        let serialized = serde_json::to_string_pretty(settings)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    RepositoryError::Storage(format!(
                        "could not create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        tokio::fs::write(&self.path, serialized).await.map_err(|e| {
            RepositoryError::Storage(format!("could not write {}: {e}", self.path.display()))
        })
    }
}
