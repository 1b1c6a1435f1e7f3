//! Pagination approximation over the offset-less listing API.
//!
//! The upstream listing endpoint has no offset/skip parameter, so a page is
//! produced by over-fetching enough records to cover it and slicing the
//! requested window out of the materialized list. The reported `total` is
//! the count of records materialized for the request, not an upstream grand
//! total.

use modeldeck_core::{HubModel, ModelPage};

/// Upper bound on how many records a single listing call may request.
/// Keeps deep pages from turning into arbitrarily large upstream fetches.
pub const OVER_FETCH_CAP: u32 = 200;

/// How many records to request for the given page window.
pub const fn over_fetch_count(page: u32, limit: u32) -> u32 {
    let wanted = page.saturating_mul(limit);
    if wanted > OVER_FETCH_CAP {
        OVER_FETCH_CAP
    } else {
        wanted
    }
}

/// Slice the requested page out of the materialized records.
pub fn build_page(models: Vec<HubModel>, page: u32, limit: u32) -> ModelPage {
    let total = models.len() as u64;
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);

    let items = models
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    ModelPage {
        items,
        total,
        page,
        limit,
    }
}
