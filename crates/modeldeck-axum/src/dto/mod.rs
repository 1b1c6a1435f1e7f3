//! Request/response DTOs specific to the web adapter.
//!
//! Core-owned types (`HubModel`, `ModelPage`, probe/pull outcomes) serialize
//! directly; only the shapes the transport layer adds live here.

use modeldeck_core::LocalModel;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/ollama/test-connection`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionRequest {
    /// Base URL of the Ollama server (e.g., `http://localhost:11434`)
    pub url: String,
}

/// Query parameters of `GET /api/ollama/local-models`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalModelsParams {
    pub ollama_url: String,
}

/// Response body of `GET /api/ollama/local-models`.
#[derive(Debug, Clone, Serialize)]
pub struct LocalModelsResponse {
    pub models: Vec<LocalModel>,
}

/// Body of `POST /api/ollama/pull-model`.
#[derive(Debug, Clone, Deserialize)]
pub struct PullModelRequest {
    pub ollama_url: String,
    pub model_name: String,
}
