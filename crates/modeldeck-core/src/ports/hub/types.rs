//! Core-owned DTOs for Hub operations.
//!
//! These types cross the boundary between `modeldeck-hub` and consumers.
//! They contain only the data the service returns to its own clients, not
//! upstream API details. Field names serialize in the camelCase form the
//! web frontend consumes (`lastModified`, `iconUrl`).

use serde::{Deserialize, Serialize};

/// A model record normalized from the Hub listing API.
///
/// `id` is always non-empty; every other field degrades to `None`/default
/// rather than failing the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubModel {
    /// Unique model identifier (e.g., "org/name" or "name")
    pub id: String,
    /// Display name (usually equal to the id)
    pub name: String,
    /// Owning user or organization
    pub creator: Option<String>,
    /// Best-effort short description
    pub description: Option<String>,
    /// Upstream tags, coerced to strings (deduplication not guaranteed)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Total download count
    #[serde(default)]
    pub downloads: u64,
    /// Like count
    pub likes: Option<u64>,
    /// Last modified timestamp (ISO 8601)
    pub last_modified: Option<String>,
    /// Whether the model is private
    pub private: Option<bool>,
    /// Icon URL, when a known creator mapping exists
    pub icon_url: Option<String>,
}

/// Detailed model information, as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubModelDetail {
    #[serde(flatten)]
    pub model: HubModel,
    /// Upstream pipeline/task tag (e.g., "text-generation")
    pub pipeline_tag: Option<String>,
    /// Raw card metadata, passed through untouched
    #[serde(rename = "cardData")]
    pub card_data: Option<serde_json::Value>,
    /// Names of the files in the model repository
    #[serde(default)]
    pub files: Vec<String>,
}

/// One page of listing results.
///
/// `total` counts the records fetched and materialized for this request. It
/// grows with `page` up to the over-fetch cap and is NOT the grand total of
/// matching upstream records; the listing endpoint exposes no such value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPage {
    /// Models for the requested page, in upstream sort order
    pub items: Vec<HubModel>,
    /// Count of all records materialized for this request (approximate)
    pub total: u64,
    /// Echo of the requested page number (1-indexed)
    pub page: u32,
    /// Echo of the requested page size
    pub limit: u32,
}

/// Sort field options for model listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Sort by download count (default)
    #[default]
    Downloads,
    /// Sort by number of likes
    Likes,
    /// Sort by last modified date
    #[serde(rename = "lastModified")]
    Modified,
}

impl SortField {
    /// Get the API parameter value for this sort field.
    #[must_use]
    pub const fn as_api_param(self) -> &'static str {
        match self {
            Self::Downloads => "downloads",
            Self::Likes => "likes",
            Self::Modified => "lastModified",
        }
    }

    /// Resolve a caller-supplied sort name.
    ///
    /// Unknown values fall back to `lastModified` rather than erroring.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        match raw {
            "downloads" => Self::Downloads,
            "likes" => Self::Likes,
            _ => Self::Modified,
        }
    }
}

/// Query parameters for listing models.
#[derive(Debug, Clone)]
pub struct ListModelsQuery {
    /// Free-text search term
    pub search: Option<String>,
    /// Results per page (1-100)
    pub limit: u32,
    /// Page number (1-indexed)
    pub page: u32,
    /// Sort field
    pub sort_by: SortField,
    /// Sort ascending (false = descending)
    pub ascending: bool,
}

impl Default for ListModelsQuery {
    fn default() -> Self {
        Self {
            search: None,
            limit: 12,
            page: 1,
            sort_by: SortField::Downloads,
            ascending: false,
        }
    }
}

impl ListModelsQuery {
    /// Create a query with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the sort field and direction.
    #[must_use]
    pub const fn with_sort(mut self, field: SortField, ascending: bool) -> Self {
        self.sort_by = field;
        self.ascending = ascending;
        self
    }
}
