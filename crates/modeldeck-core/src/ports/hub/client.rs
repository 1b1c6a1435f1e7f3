//! Hub client port trait.

use super::error::HubPortResult;
use super::types::{HubModelDetail, ListModelsQuery, ModelPage};
use async_trait::async_trait;

/// Port trait for Hugging Face Hub operations.
///
/// This trait defines the interface that the service uses to browse the
/// Hub catalog. The implementation lives in `modeldeck-hub`.
///
/// # Design
///
/// - Uses core-owned DTOs, not upstream API types
/// - Returns `HubPortError` for all failures
/// - Each method performs at most one upstream HTTP request
#[async_trait]
pub trait HubClientPort: Send + Sync {
    /// List models for one page of results.
    ///
    /// Pagination is approximated: the implementation over-fetches enough
    /// records to cover the requested page and slices it out in memory.
    async fn list_models(&self, query: &ListModelsQuery) -> HubPortResult<ModelPage>;

    /// Fetch detailed information for a fully-qualified model id.
    ///
    /// A missing model surfaces as `HubPortError::ModelNotFound` so callers
    /// can distinguish it from a generic upstream failure.
    async fn model_detail(&self, model_id: &str) -> HubPortResult<HubModelDetail>;
}
