//! Internal API response types for the Hub.
//!
//! These types are internal to `modeldeck-hub` and are not exposed to
//! consumers. External consumers should use the port DTOs defined in
//! `modeldeck-core`.

use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Hub client.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Base URL for the Hub model API (default: <https://huggingface.co/api/models>)
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional authentication token for private models
    pub token: Option<String>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://huggingface.co/api/models")
                .expect("default Hub API URL is valid"),
            user_agent: concat!("modeldeck-hub/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

// ============================================================================
// Lenient field deserializers
// ============================================================================

/// Deserialize a field into `T`, degrading to `None` when the upstream value
/// has an unexpected shape. A wrong-typed field must not fail the record,
/// let alone the whole listing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a string-ish field, coercing scalars to their text form.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Deserialize an array field element-by-element, dropping elements that do
/// not fit and treating a non-array as empty.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

// ============================================================================
// Raw upstream records
// ============================================================================

/// One raw model record from the Hub listing or detail endpoint.
///
/// Every field degrades independently: only a missing or wrong-typed `id`
/// makes the record unusable downstream. `tags` stays as raw JSON values
/// because the upstream list occasionally mixes in non-string entries, and
/// `cardData` is genuinely schema-less.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawModelRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    /// Legacy duplicate of `id` still present in some responses.
    #[serde(rename = "modelId", deserialize_with = "lenient")]
    pub model_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub private: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub downloads: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub likes: Option<u64>,
    #[serde(rename = "lastModified", deserialize_with = "lenient_string")]
    pub last_modified: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub tags: Vec<Value>,
    #[serde(deserialize_with = "lenient")]
    pub pipeline_tag: Option<String>,
    #[serde(rename = "cardData")]
    pub card_data: Option<Value>,
    #[serde(deserialize_with = "lenient_seq")]
    pub siblings: Vec<RawSibling>,
}

impl RawModelRecord {
    /// The record's identifier, preferring the modern `id` key.
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().or(self.model_id.as_deref())
    }
}

/// A file entry in a model repository listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSibling {
    #[serde(deserialize_with = "lenient")]
    pub rfilename: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hub_config_default() {
        let config = HubConfig::default();
        assert_eq!(
            config.base_url.as_str(),
            "https://huggingface.co/api/models"
        );
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_raw_record_tolerates_sparse_input() {
        let record: RawModelRecord = serde_json::from_value(json!({"id": "gpt2"})).unwrap();
        assert_eq!(record.id.as_deref(), Some("gpt2"));
        assert!(record.tags.is_empty());
        assert!(record.siblings.is_empty());
        assert_eq!(record.downloads, None);
    }

    #[test]
    fn test_raw_record_accepts_legacy_model_id_key() {
        let record: RawModelRecord =
            serde_json::from_value(json!({"modelId": "org/name", "downloads": 3})).unwrap();
        assert_eq!(record.identifier(), Some("org/name"));
        assert_eq!(record.downloads, Some(3));
    }

    #[test]
    fn test_raw_record_identifier_prefers_modern_key() {
        let record: RawModelRecord =
            serde_json::from_value(json!({"id": "org/name", "modelId": "org/name"})).unwrap();
        assert_eq!(record.identifier(), Some("org/name"));
    }

    #[test]
    fn test_raw_record_wrong_typed_fields_degrade() {
        let record: RawModelRecord = serde_json::from_value(json!({
            "id": "x",
            "downloads": "not-a-number",
            "likes": {"weird": true},
            "private": "yes",
            "tags": "not-an-array",
            "siblings": [{"rfilename": "a.bin"}, "junk", {"rfilename": 5}]
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("x"));
        assert_eq!(record.downloads, None);
        assert_eq!(record.likes, None);
        assert_eq!(record.private, None);
        assert!(record.tags.is_empty());
        // one well-formed sibling survives, one has a wrong-typed filename
        assert_eq!(record.siblings.len(), 2);
        assert_eq!(record.siblings[0].rfilename.as_deref(), Some("a.bin"));
        assert_eq!(record.siblings[1].rfilename, None);
    }

    #[test]
    fn test_raw_record_wrong_typed_id_degrades_to_none() {
        let record: RawModelRecord =
            serde_json::from_value(json!({"id": 12345, "downloads": 9})).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.downloads, Some(9));
    }

    #[test]
    fn test_raw_record_coerces_scalar_last_modified() {
        let record: RawModelRecord =
            serde_json::from_value(json!({"id": "x", "lastModified": 1705312200})).unwrap();
        assert_eq!(record.last_modified.as_deref(), Some("1705312200"));
    }

    #[test]
    fn test_raw_record_keeps_mixed_tags() {
        let record: RawModelRecord =
            serde_json::from_value(json!({"id": "x", "tags": ["nlp", 7, {"odd": true}]})).unwrap();
        assert_eq!(record.tags.len(), 3);
    }
}
