//! Ollama client port trait.

use super::types::{ConnectionProbe, LocalModel, PullOutcome};
use async_trait::async_trait;

/// Port trait for operations against a caller-supplied Ollama server.
///
/// All methods take the base URL per call; the service holds no Ollama
/// connection state. None of them return `Err`: reachability is the very
/// question being asked, so failures come back as structured outcomes.
#[async_trait]
pub trait OllamaClientPort: Send + Sync {
    /// Check whether an Ollama server is reachable at the given base URL.
    async fn probe(&self, base_url: &str) -> ConnectionProbe;

    /// List models installed on the Ollama server.
    ///
    /// Returns an empty list on any failure; callers cannot distinguish
    /// "no models" from "unreachable" through this method alone.
    async fn list_local_models(&self, base_url: &str) -> Vec<LocalModel>;

    /// Ask the Ollama server to pull a model by name.
    async fn pull_model(&self, base_url: &str, model_name: &str) -> PullOutcome;
}
