//! Internal wire types for Ollama API responses.

use modeldeck_core::LocalModel;
use serde::Deserialize;

/// Response shape of `GET /api/tags`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TagsResponse {
    pub models: Vec<LocalModel>,
}

/// Response shape of `POST /api/pull` with `stream: false`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}
