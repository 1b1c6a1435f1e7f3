//! Ollama handlers - connectivity checks and model management.
//!
//! These endpoints return 200 with a status/message body even on failure:
//! "is it reachable" is itself the question being asked, so a failed probe
//! is an answer, not an error.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::{ConnectionRequest, LocalModelsParams, LocalModelsResponse, PullModelRequest};
use crate::state::AppState;
use modeldeck_core::{ConnectionProbe, PullOutcome};

/// Test connectivity to an Ollama server.
pub async fn test_connection(
    State(state): State<AppState>,
    Json(req): Json<ConnectionRequest>,
) -> Json<ConnectionProbe> {
    Json(state.ollama.probe(&req.url).await)
}

/// List models installed on an Ollama server.
///
/// An unreachable server yields an empty list, same as a server with no
/// models; use the probe endpoint to tell the two apart.
pub async fn local_models(
    State(state): State<AppState>,
    Query(params): Query<LocalModelsParams>,
) -> Json<LocalModelsResponse> {
    let models = state.ollama.list_local_models(&params.ollama_url).await;
    Json(LocalModelsResponse { models })
}

/// Ask an Ollama server to pull a model.
pub async fn pull_model(
    State(state): State<AppState>,
    Json(req): Json<PullModelRequest>,
) -> Json<PullOutcome> {
    Json(state.ollama.pull_model(&req.ollama_url, &req.model_name).await)
}
