//! Port trait implementation for `HubClient`.
//!
//! This module implements the core-owned `HubClientPort` trait for
//! `HubClient`, handling the conversion between internal errors and core
//! port errors.

use async_trait::async_trait;
use modeldeck_core::{
    HubClientPort, HubModelDetail, HubPortError, HubPortResult, ListModelsQuery, ModelPage,
};

use crate::client::HubClient;
use crate::error::HubError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HubError` to core `HubPortError`.
fn map_error(err: HubError) -> HubPortError {
    match err {
        HubError::UpstreamStatus { status, detail, .. } => {
            HubPortError::UpstreamStatus { status, detail }
        }
        HubError::ModelNotFound { model_id } => HubPortError::ModelNotFound { model_id },
        HubError::InvalidResponse { message } => HubPortError::InvalidResponse { message },
        HubError::Network(e) => HubPortError::Network {
            message: e.to_string(),
        },
        HubError::InvalidUrl(e) => HubPortError::Configuration {
            message: e.to_string(),
        },
        HubError::JsonParse(e) => HubPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> HubClientPort for HubClient<B> {
    async fn list_models(&self, query: &ListModelsQuery) -> HubPortResult<ModelPage> {
        self.list_models_page(query).await.map_err(map_error)
    }

    async fn model_detail(&self, model_id: &str) -> HubPortResult<HubModelDetail> {
        let model_id = model_id.trim();
        if model_id.is_empty() {
            return Err(HubPortError::Configuration {
                message: "Model id cannot be empty".to_string(),
            });
        }

        self.fetch_model_detail(model_id).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{fake_model_json, test_config};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[test]
    fn test_map_error_upstream_status() {
        let err = HubError::UpstreamStatus {
            status: 503,
            url: "https://huggingface.co/api/models".to_string(),
            detail: "Service Unavailable".to_string(),
        };
        match map_error(err) {
            HubPortError::UpstreamStatus { status, detail } => {
                assert_eq!(status, 503);
                assert_eq!(detail, "Service Unavailable");
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_not_found() {
        let err = HubError::ModelNotFound {
            model_id: "org/missing".to_string(),
        };
        match map_error(err) {
            HubPortError::ModelNotFound { model_id } => assert_eq!(model_id, "org/missing"),
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_json_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert!(matches!(
            map_error(HubError::JsonParse(json_err)),
            HubPortError::InvalidResponse { .. }
        ));
    }

    #[tokio::test]
    async fn test_port_list_models() {
        let backend = FakeBackend::new().with_response(
            "huggingface.co",
            CannedResponse {
                json: json!([fake_model_json("org/m1", 100)]),
            },
        );

        let client = HubClient::with_backend(test_config(), backend);
        let page = client.list_models(&ListModelsQuery::new()).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_port_model_detail_rejects_empty_id() {
        let client = HubClient::with_backend(test_config(), FakeBackend::new());
        let result = client.model_detail("  ").await;
        assert!(matches!(result, Err(HubPortError::Configuration { .. })));
    }
}
