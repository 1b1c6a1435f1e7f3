//! Download simulation result type.

use serde::{Deserialize, Serialize};

/// Result of a simulated model download.
///
/// `download_path` is a constructed path; no bytes are transferred and the
/// path is not guaranteed to contain anything beyond the created directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadReceipt {
    /// Human-readable status message
    pub message: String,
    /// The model id the simulation was requested for
    #[serde(rename = "modelId")]
    pub model_id: String,
    /// Constructed target path under the configured download directory
    #[serde(rename = "downloadPath")]
    pub download_path: String,
}
