//! Hub client for browsing models and fetching metadata.
//!
//! This module provides the main client interface for interacting with
//! the Hub API.

mod detail;
mod list;

use crate::config::HubClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::HubConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Hub client using the reqwest HTTP backend.
pub type DefaultHubClient = HubClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the Hub API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultHubClient` for production code. The generic parameter `B` is
/// an implementation detail - external code should not instantiate this
/// directly but use `DefaultHubClient::new()`.
pub struct HubClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: HubConfig,
}

impl DefaultHubClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &HubClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    /// Create a new client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(&HubClientConfig::default())
    }

    fn to_internal_config(config: &HubClientConfig) -> HubConfig {
        HubConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://huggingface.co/api/models").expect("default URL is valid")
            }),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            token: config.token.clone(),
        }
    }
}

impl<B: HttpBackend> HubClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: HubConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
