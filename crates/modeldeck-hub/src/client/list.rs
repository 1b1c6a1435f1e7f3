//! Listing functionality for the Hub client.

use crate::error::HubResult;
use crate::http::HttpBackend;
use crate::models::RawModelRecord;
use crate::paging::{build_page, over_fetch_count};
use crate::transform::transform_model;
use crate::url::build_list_url;
use modeldeck_core::{ListModelsQuery, ModelPage};

use super::HubClient;

impl<B: HttpBackend> HubClient<B> {
    /// List models for one page of results.
    ///
    /// Issues a single listing call for the over-fetched window, normalizes
    /// the records (silently skipping any without an id), and slices out the
    /// requested page.
    pub(crate) async fn list_models_page(&self, query: &ListModelsQuery) -> HubResult<ModelPage> {
        let fetch_count = over_fetch_count(query.page, query.limit);
        let url = build_list_url(&self.config, query, fetch_count);

        let records: Vec<RawModelRecord> = self.backend.get_json(&url).await?;
        let models = records.iter().filter_map(transform_model).collect();

        Ok(build_page(models, query.page, query.limit))
    }
}
