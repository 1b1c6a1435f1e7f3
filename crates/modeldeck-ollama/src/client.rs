//! HTTP client for Ollama server operations.
//!
//! One reqwest client, per-operation timeouts: probing should answer fast,
//! listing can take a moment, and pulls are large transfers.

use std::time::Duration;

use async_trait::async_trait;
use modeldeck_core::{ConnectionProbe, LocalModel, OllamaClientPort, PullOutcome};
use serde_json::json;

use crate::types::{PullResponse, TagsResponse};
use crate::url::normalize_base_url;

/// Timeout for the reachability probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for listing local models.
const LIST_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for pull requests; model pulls are large transfers.
const PULL_TIMEOUT: Duration = Duration::from_secs(300);

/// How much response body to quote back in failure messages.
const BODY_EXCERPT_LEN: usize = 200;

/// Client for a caller-supplied Ollama server.
pub struct OllamaClient {
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new client. Timeouts are applied per request.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OllamaClientPort for OllamaClient {
    async fn probe(&self, base_url: &str) -> ConnectionProbe {
        let base = normalize_base_url(base_url);
        let api_url = format!("{base}/api/tags");

        match self
            .client
            .get(&api_url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                classify_probe_response(base_url, &api_url, status, &body)
            }
            Err(e) => probe_transport_failure(base_url, &api_url, &e),
        }
    }

    async fn list_local_models(&self, base_url: &str) -> Vec<LocalModel> {
        let base = normalize_base_url(base_url);
        let api_url = format!("{base}/api/tags");

        let response = match self.client.get(&api_url).timeout(LIST_TIMEOUT).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %api_url, error = %e, "listing local models failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                url = %api_url,
                status = response.status().as_u16(),
                "listing local models got non-success status"
            );
            return Vec::new();
        }

        match response.json::<TagsResponse>().await {
            Ok(tags) => tags.models,
            Err(e) => {
                tracing::warn!(url = %api_url, error = %e, "could not parse /api/tags response");
                Vec::new()
            }
        }
    }

    async fn pull_model(&self, base_url: &str, model_name: &str) -> PullOutcome {
        let base = normalize_base_url(base_url);
        let api_url = format!("{base}/api/pull");
        let payload = json!({ "name": model_name, "stream": false });

        match self
            .client
            .post(&api_url)
            .json(&payload)
            .timeout(PULL_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                classify_pull_response(model_name, status, &body)
            }
            Err(e) => pull_transport_failure(model_name, &api_url, &e),
        }
    }
}

// ============================================================================
// Response classification
// ============================================================================

/// Classify a probe response into a success/failure outcome.
///
/// Success requires HTTP 200 AND a JSON object carrying a `models` array;
/// anything else is a failure with a descriptive message.
fn classify_probe_response(
    display_url: &str,
    api_url: &str,
    status: u16,
    body: &str,
) -> ConnectionProbe {
    if status != 200 {
        return ConnectionProbe::failure(format!(
            "Connected to {display_url}, but received status {status} from {api_url}. \
             Response: {}",
            body_excerpt(body)
        ));
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) if value.get("models").is_some_and(serde_json::Value::is_array) => {
            ConnectionProbe::success(format!(
                "Successfully connected to Ollama at {display_url} and received a valid \
                 /api/tags response."
            ))
        }
        Ok(_) => ConnectionProbe::failure(format!(
            "Connected to {display_url}, got status 200 from {api_url}, but the response \
             format was not as expected from Ollama /api/tags."
        )),
        Err(_) => ConnectionProbe::failure(format!(
            "Connected to {display_url}, got status 200 from {api_url}, but the response \
             body could not be parsed as JSON."
        )),
    }
}

/// Map a transport-level probe failure to a descriptive outcome.
fn probe_transport_failure(
    display_url: &str,
    api_url: &str,
    error: &reqwest::Error,
) -> ConnectionProbe {
    if error.is_timeout() {
        ConnectionProbe::failure(probe_timeout_message(api_url))
    } else if error.is_connect() {
        ConnectionProbe::failure(format!(
            "Failed to connect to Ollama at {display_url} (attempted {api_url}). \
             Check the server, port, and that Ollama is running."
        ))
    } else {
        ConnectionProbe::failure(format!(
            "HTTP request error while contacting {api_url}: {error}"
        ))
    }
}

fn probe_timeout_message(api_url: &str) -> String {
    format!(
        "Connection to {api_url} timed out ({} seconds).",
        PROBE_TIMEOUT.as_secs()
    )
}

/// Classify a pull response body into a pull outcome.
fn classify_pull_response(model_name: &str, status: u16, body: &str) -> PullOutcome {
    if status == 404 {
        return PullOutcome::failure(format!(
            "Model manifest for '{model_name}' was not found upstream."
        ));
    }

    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<PullResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .unwrap_or_else(|| body_excerpt(body));
        return PullOutcome::failure(format!("Ollama returned status {status}: {detail}"));
    }

    let Ok(parsed) = serde_json::from_str::<PullResponse>(body) else {
        return PullOutcome::failure(format!(
            "Pull response for '{model_name}' could not be parsed as JSON."
        ));
    };

    // "already exists" can show up in either the status or the message text
    let already_exists = [parsed.status.as_deref(), parsed.message.as_deref()]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains("already exists"));

    if already_exists {
        return PullOutcome::already_exists(format!(
            "Model '{model_name}' is already present on the Ollama server."
        ));
    }

    match parsed.status.as_deref().map(str::trim) {
        Some(status_text) if !status_text.is_empty() => PullOutcome::success(format!(
            "Pull of '{model_name}' reported status: {status_text}"
        )),
        _ => PullOutcome::failure(format!(
            "Pull response for '{model_name}' did not include a status field."
        )),
    }
}

/// Map a transport-level pull failure to a descriptive outcome.
fn pull_transport_failure(model_name: &str, api_url: &str, error: &reqwest::Error) -> PullOutcome {
    if error.is_timeout() {
        PullOutcome::failure(format!(
            "Pull of '{model_name}' via {api_url} timed out ({} seconds).",
            PULL_TIMEOUT.as_secs()
        ))
    } else {
        PullOutcome::failure(format!(
            "Pull of '{model_name}' via {api_url} failed: {error}"
        ))
    }
}

fn body_excerpt(body: &str) -> String {
    if body.is_empty() {
        "No response body".to_string()
    } else {
        body.chars().take(BODY_EXCERPT_LEN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modeldeck_core::{ProbeStatus, PullStatus};

    #[test]
    fn test_probe_200_with_models_array_is_success() {
        let probe = classify_probe_response(
            "localhost:11434",
            "http://localhost:11434/api/tags",
            200,
            r#"{"models": []}"#,
        );
        assert_eq!(probe.status, ProbeStatus::Success);
        assert!(probe.message.contains("localhost:11434"));
    }

    #[test]
    fn test_probe_200_wrong_shape_is_failure() {
        let probe = classify_probe_response(
            "localhost:11434",
            "http://localhost:11434/api/tags",
            200,
            r#"{"version": "0.5.1"}"#,
        );
        assert_eq!(probe.status, ProbeStatus::Failure);
        assert!(probe.message.contains("not as expected"));
    }

    #[test]
    fn test_probe_200_unparsable_body_is_failure() {
        let probe = classify_probe_response(
            "localhost:11434",
            "http://localhost:11434/api/tags",
            200,
            "<html>hi</html>",
        );
        assert_eq!(probe.status, ProbeStatus::Failure);
        assert!(probe.message.contains("could not be parsed"));
    }

    #[test]
    fn test_probe_non_200_is_failure_with_status() {
        let probe = classify_probe_response(
            "localhost:8080",
            "http://localhost:8080/api/tags",
            500,
            "boom",
        );
        assert_eq!(probe.status, ProbeStatus::Failure);
        assert!(probe.message.contains("500"));
        assert!(probe.message.contains("boom"));
    }

    #[test]
    fn test_probe_timeout_message_names_duration() {
        let message = probe_timeout_message("http://localhost:11434/api/tags");
        assert!(message.contains("5 seconds"));
        assert!(message.contains("timed out"));
    }

    #[test]
    fn test_pull_404_names_missing_manifest() {
        let outcome = classify_pull_response("missing:latest", 404, "");
        assert_eq!(outcome.status, PullStatus::Failure);
        assert!(outcome.message.contains("manifest"));
        assert!(outcome.message.contains("missing:latest"));
    }

    #[test]
    fn test_pull_error_detail_extracted_from_json_body() {
        let outcome =
            classify_pull_response("x", 500, r#"{"error": "out of disk space"}"#);
        assert_eq!(outcome.status, PullStatus::Failure);
        assert!(outcome.message.contains("out of disk space"));
        assert!(outcome.message.contains("500"));
    }

    #[test]
    fn test_pull_error_detail_falls_back_to_raw_text() {
        let outcome = classify_pull_response("x", 502, "bad gateway");
        assert!(outcome.message.contains("bad gateway"));
    }

    #[test]
    fn test_pull_already_exists_in_message() {
        let outcome = classify_pull_response(
            "x",
            200,
            r#"{"status":"success","message":"model 'x' already exists"}"#,
        );
        assert_eq!(outcome.status, PullStatus::SuccessAlreadyExists);
    }

    #[test]
    fn test_pull_already_exists_in_status() {
        let outcome =
            classify_pull_response("x", 200, r#"{"status":"model Already Exists locally"}"#);
        assert_eq!(outcome.status, PullStatus::SuccessAlreadyExists);
    }

    #[test]
    fn test_pull_plain_success() {
        let outcome = classify_pull_response("llama3:8b", 200, r#"{"status":"success"}"#);
        assert_eq!(outcome.status, PullStatus::Success);
        assert!(outcome.message.contains("llama3:8b"));
    }

    #[test]
    fn test_pull_missing_status_field_is_failure() {
        let outcome = classify_pull_response("x", 200, "{}");
        assert_eq!(outcome.status, PullStatus::Failure);
        assert!(outcome.message.contains("status field"));
    }

    #[test]
    fn test_pull_unparsable_success_body_is_failure() {
        let outcome = classify_pull_response("x", 200, "not json");
        assert_eq!(outcome.status, PullStatus::Failure);
    }

    #[tokio::test]
    async fn test_probe_unreachable_port_is_failure() {
        // Port 1 on loopback is essentially never listening
        let client = OllamaClient::new();
        let probe = client.probe("127.0.0.1:1").await;
        assert_eq!(probe.status, ProbeStatus::Failure);
    }
}
