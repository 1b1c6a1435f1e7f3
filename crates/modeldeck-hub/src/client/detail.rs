//! Single-model detail lookups.

use crate::error::{HubError, HubResult};
use crate::http::HttpBackend;
use crate::models::RawModelRecord;
use crate::transform::transform_detail;
use crate::url::build_model_detail_url;
use modeldeck_core::HubModelDetail;

use super::HubClient;

impl<B: HttpBackend> HubClient<B> {
    /// Fetch detailed information for a fully-qualified model id.
    ///
    /// An upstream 404 surfaces as `HubError::ModelNotFound`.
    pub(crate) async fn fetch_model_detail(&self, model_id: &str) -> HubResult<HubModelDetail> {
        let url = build_model_detail_url(&self.config, model_id);
        let record: RawModelRecord = self.backend.get_json(&url).await?;

        transform_detail(&record).ok_or_else(|| HubError::InvalidResponse {
            message: format!("Detail record for '{model_id}' is missing an id"),
        })
    }
}
