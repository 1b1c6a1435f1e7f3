//! HTTP backend abstraction for the Hub API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and performs exactly one attempt per request; a failed
//! upstream call fails the operation immediately.

use crate::error::{HubError, HubResult};
use crate::models::HubConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

/// How much upstream body text to keep when reporting a non-success status.
const DETAIL_EXCERPT_LEN: usize = 200;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the `HubClientPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HubResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// This is an implementation detail - external code should use
/// `DefaultHubClient` and interact with it through the `HubClientPort` trait.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &HubConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            auth_token: config.token.clone(),
        }
    }

    /// Build a request with optional authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url.as_str());
        if let Some(ref token) = self.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        request
    }

    /// Issue a single request and classify the response status.
    async fn fetch(&self, url: &Url) -> HubResult<reqwest::Response> {
        let response = self.build_request(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // 404 on a model path is a distinct outcome, not a generic failure
        if status.as_u16() == 404 {
            if let Some(model_id) = extract_model_id_from_path(url.path()) {
                return Err(HubError::ModelNotFound { model_id });
            }
        }

        let body = response.text().await.unwrap_or_default();
        let detail = if body.is_empty() {
            "No response body".to_string()
        } else {
            body.chars().take(DETAIL_EXCERPT_LEN).collect()
        };

        Err(HubError::UpstreamStatus {
            status: status.as_u16(),
            url: url.to_string(),
            detail,
        })
    }
}

/// Try to extract a model ID from an API path.
fn extract_model_id_from_path(path: &str) -> Option<String> {
    let path = path.trim_start_matches('/');
    if let Some(rest) = path.strip_prefix("api/models/") {
        let parts: Vec<&str> = rest.splitn(3, '/').collect();
        if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Some(format!("{}/{}", parts[0], parts[1]));
        }
        if parts.len() == 1 && !parts[0].is_empty() {
            return Some(parts[0].to_string());
        }
    }
    None
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HubResult<T> {
        let response = self.fetch(url).await?;
        // Decode through serde_json so a malformed body surfaces as a
        // parse failure rather than a generic transport error
        let body = response.text().await?;
        let data: T = serde_json::from_str(&body)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub struct CannedResponse {
        pub json: serde_json::Value,
    }

    /// A fake HTTP backend that returns canned responses.
    pub struct FakeBackend {
        responses: Arc<Mutex<HashMap<String, CannedResponse>>>,
        default_response: Option<CannedResponse>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self {
                responses: Arc::new(Mutex::new(HashMap::new())),
                default_response: None,
            }
        }

        /// Add a canned response for a URL pattern.
        pub fn with_response(self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), response);
            self
        }

        /// Set a default response for URLs that don't match any pattern.
        pub fn with_default(mut self, response: CannedResponse) -> Self {
            self.default_response = Some(response);
            self
        }

        fn find_response(&self, url: &str) -> Option<CannedResponse> {
            {
                let responses = self.responses.lock().unwrap();
                for (pattern, response) in responses.iter() {
                    if url.contains(pattern) {
                        return Some(response.clone());
                    }
                }
            }
            self.default_response.clone()
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HubResult<T> {
            let response =
                self.find_response(url.as_str())
                    .ok_or_else(|| HubError::UpstreamStatus {
                        status: 404,
                        url: url.to_string(),
                        detail: "No canned response".to_string(),
                    })?;

            serde_json::from_value(response.json).map_err(Into::into)
        }
    }
}
