//! URL construction helpers for the Hub API.
//!
//! This module provides pure functions for building Hub API URLs,
//! ensuring consistent URL construction across all API calls.

use crate::models::HubConfig;
use modeldeck_core::ListModelsQuery;
use url::Url;

/// Build a listing URL requesting up to `fetch_count` records.
///
/// The listing endpoint has no offset parameter, so the caller passes the
/// over-fetched count and slices the page out of the materialized result.
pub fn build_list_url(config: &HubConfig, query: &ListModelsQuery, fetch_count: u32) -> Url {
    let direction = if query.ascending { "1" } else { "-1" };

    let mut url = config.base_url.clone();

    let query_string = format!(
        "sort={}&direction={}&limit={}&full=true&cardData=true",
        query.sort_by.as_api_param(),
        direction,
        fetch_count
    );

    url.set_query(Some(&query_string));

    if let Some(ref search) = query.search {
        let term = search.trim();
        if !term.is_empty() {
            let current = url.query().unwrap_or("");
            url.set_query(Some(&format!(
                "{current}&search={}",
                urlencoding::encode(term)
            )));
        }
    }

    url
}

/// Build a URL for the model detail endpoint.
pub fn build_model_detail_url(config: &HubConfig, model_id: &str) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{}", model_id.trim_matches('/')));

    url
}
