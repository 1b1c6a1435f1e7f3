//! Simulated model downloads.
//!
//! No model weights are ever transferred. The simulation creates the
//! configured download directory if needed and returns the path a real
//! download would target, flattening namespaced ids into a single segment.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::DownloadReceipt;
use crate::ports::{CoreError, SettingsRepository};

/// Separator substituted for `/` when flattening a model id into a path segment.
const ID_PATH_SEPARATOR: &str = "__";

/// Service that simulates model downloads into the configured directory.
pub struct DownloadSimulator {
    settings: Arc<dyn SettingsRepository>,
}

impl DownloadSimulator {
    /// Create a new simulator backed by the given settings repository.
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }

    /// Simulate downloading `model_id`.
    ///
    /// Ensures the configured download directory exists (created recursively
    /// when missing; a creation failure surfaces as an error carrying the OS
    /// text). Returns a receipt with the constructed target path.
    pub async fn simulate(&self, model_id: &str) -> Result<DownloadReceipt, CoreError> {
        if model_id.trim().is_empty() {
            return Err(CoreError::Validation("Model id cannot be empty".to_string()));
        }

        let settings = self.settings.load().await?;
        let download_dir = PathBuf::from(settings.effective_model_directory());

        tokio::fs::create_dir_all(&download_dir).await.map_err(|e| {
            CoreError::Internal(format!(
                "Could not create download directory {}: {e}",
                download_dir.display()
            ))
        })?;

        let target = download_dir.join(model_id.replace('/', ID_PATH_SEPARATOR));
        let download_path = target.to_string_lossy().into_owned();

        tracing::info!(model_id, path = %download_path, "simulating model download");

        Ok(DownloadReceipt {
            message: format!(
                "Download simulation for model {model_id} has been logged on the server. \
                 Target directory: {download_path}"
            ),
            model_id: model_id.to_string(),
            download_path,
        })
    }
}
