//! Model handlers - Hub listing, detail, and simulated downloads.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;
use modeldeck_core::{
    DownloadReceipt, HubModelDetail, ListModelsQuery, ModelPage, SortField,
};

/// Default page size; sized for the frontend's card grid.
const DEFAULT_LIMIT: u32 = 12;
/// Largest accepted page size.
const MAX_LIMIT: u32 = 100;

/// Query parameters accepted by the listing endpoint.
///
/// `sort_by` and `sort` are both accepted for the same thing; `sort_by`
/// wins when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct ListModelsParams {
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub sort_by: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

fn parse_list_query(params: &ListModelsParams) -> Result<ListModelsQuery, HttpError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(HttpError::BadRequest(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {limit}"
        )));
    }

    let page = params.page.unwrap_or(1);
    if page < 1 {
        return Err(HttpError::BadRequest(format!(
            "page must be >= 1, got {page}"
        )));
    }

    let ascending = match params.direction.as_deref() {
        None | Some("desc") => false,
        Some("asc") => true,
        Some(other) => {
            return Err(HttpError::BadRequest(format!(
                "direction must be 'asc' or 'desc', got '{other}'"
            )));
        }
    };

    let sort_by = params
        .sort_by
        .as_deref()
        .or(params.sort.as_deref())
        .map_or(SortField::Downloads, SortField::resolve);

    Ok(ListModelsQuery {
        search: params
            .search
            .clone()
            .filter(|s| !s.trim().is_empty()),
        limit,
        page,
        sort_by,
        ascending,
    })
}

/// List or search Hub models with approximated pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListModelsParams>,
) -> Result<Json<ModelPage>, HttpError> {
    let query = parse_list_query(&params)?;
    Ok(Json(state.hub.list_models(&query).await?))
}

/// Get detailed information for a namespaced model id.
pub async fn detail(
    State(state): State<AppState>,
    Path((author, name)): Path<(String, String)>,
) -> Result<Json<HubModelDetail>, HttpError> {
    let model_id = format!("{author}/{name}");
    Ok(Json(state.hub.model_detail(&model_id).await?))
}

/// Simulate downloading a model with a plain (non-namespaced) id.
pub async fn download(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<DownloadReceipt>, HttpError> {
    Ok(Json(state.downloads.simulate(&model_id).await?))
}

/// Simulate downloading a model with a namespaced `author/name` id.
pub async fn download_namespaced(
    State(state): State<AppState>,
    Path((author, name)): Path<(String, String)>,
) -> Result<Json<DownloadReceipt>, HttpError> {
    let model_id = format!("{author}/{name}");
    Ok(Json(state.downloads.simulate(&model_id).await?))
}
