//! Normalization of raw upstream records.
//!
//! Maps one raw Hub record into the service's `HubModel` representation.
//! The mapping never fails per-field: everything except the id degrades to
//! `None`/default. A record with a missing or empty id is skipped entirely.

use crate::models::RawModelRecord;
use modeldeck_core::{HubModel, HubModelDetail};
use serde_json::Value;

/// Maximum description length taken from a card text blob.
const DESCRIPTION_CAP: usize = 300;

/// Card-metadata keys that usually hold a short model summary.
const SUMMARY_KEYS: &[&str] = &["model-summary", "model_description", "description", "summary"];

/// Heading marker that introduces a summary paragraph in card text.
const SUMMARY_HEADING: &str = "model summary";

/// Known creator -> icon mappings. The listing API exposes no icon source,
/// so anything outside this list gets no icon.
const CREATOR_ICONS: &[(&str, &str)] = &[
    ("meta", "icons/llama-icon.png"),
    ("meta-llama", "icons/llama-icon.png"),
    ("mistralai", "icons/mistral-icon.png"),
];

// ============================================================================
// Record transformation
// ============================================================================

/// Transform a raw record into a `HubModel`.
///
/// Returns `None` when the record has no usable id.
pub fn transform_model(record: &RawModelRecord) -> Option<HubModel> {
    let id = record.identifier().map(str::trim).filter(|s| !s.is_empty())?;

    let creator = record.author.clone().or_else(|| derive_creator(id));
    let icon_url = icon_for_creator(creator.as_deref());

    Some(HubModel {
        id: id.to_string(),
        name: id.to_string(),
        creator,
        description: extract_description(record),
        tags: coerce_tags(&record.tags),
        downloads: record.downloads.unwrap_or(0),
        likes: record.likes,
        last_modified: record.last_modified.clone(),
        private: record.private,
        icon_url,
    })
}

/// Transform a raw record into a `HubModelDetail`.
///
/// Adds the pipeline tag, the raw card metadata, and the repository file
/// names on top of the base transformation.
pub fn transform_detail(record: &RawModelRecord) -> Option<HubModelDetail> {
    let model = transform_model(record)?;

    let files = record
        .siblings
        .iter()
        .filter_map(|s| s.rfilename.clone())
        .collect();

    Some(HubModelDetail {
        model,
        pipeline_tag: record.pipeline_tag.clone(),
        card_data: record.card_data.clone(),
        files,
    })
}

/// Derive the creator from a namespaced id ("org/name" -> "org").
fn derive_creator(id: &str) -> Option<String> {
    if id.contains('/') {
        id.split('/').next().map(str::to_string)
    } else {
        None
    }
}

/// Coerce raw tag values to strings: strings kept, numbers stringified,
/// anything structured dropped. Order is preserved, duplicates are not removed.
fn coerce_tags(raw: &[Value]) -> Vec<String> {
    raw.iter()
        .filter_map(|tag| match tag {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}

fn icon_for_creator(creator: Option<&str>) -> Option<String> {
    let creator = creator?;
    CREATOR_ICONS
        .iter()
        .find(|(name, _)| creator.eq_ignore_ascii_case(name))
        .map(|(_, icon)| (*icon).to_string())
}

// ============================================================================
// Description extraction
// ============================================================================

type DescriptionStrategy = fn(&RawModelRecord) -> Option<String>;

/// Extraction strategies tried in order until one yields a description.
const DESCRIPTION_STRATEGIES: &[DescriptionStrategy] =
    &[card_summary, pipeline_tag, card_text_excerpt];

/// Best-effort description extraction.
fn extract_description(record: &RawModelRecord) -> Option<String> {
    DESCRIPTION_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(record))
}

/// Look for a summary-like key in the card metadata object.
///
/// A by-language object resolves "en" first, else the first string value.
fn card_summary(record: &RawModelRecord) -> Option<String> {
    let card = record.card_data.as_ref()?.as_object()?;

    for key in SUMMARY_KEYS {
        match card.get(*key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::Object(by_language)) => {
                if let Some(s) = by_language.get("en").and_then(Value::as_str) {
                    return Some(s.to_string());
                }
                if let Some(s) = by_language.values().find_map(Value::as_str) {
                    return Some(s.to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Fall back to the upstream pipeline/task tag.
fn pipeline_tag(record: &RawModelRecord) -> Option<String> {
    record
        .pipeline_tag
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// When the card metadata is a raw text blob, take the first paragraph after
/// a "Model Summary" heading, else the leading characters.
fn card_text_excerpt(record: &RawModelRecord) -> Option<String> {
    let text = record.card_data.as_ref()?.as_str()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(
        paragraph_after_heading(trimmed, SUMMARY_HEADING)
            .unwrap_or_else(|| truncate_chars(trimmed, DESCRIPTION_CAP)),
    )
}

/// Find the first non-empty paragraph after a line containing `heading`
/// (case-insensitive).
fn paragraph_after_heading(text: &str, heading: &str) -> Option<String> {
    let heading_line = text
        .lines()
        .position(|line| line.to_lowercase().contains(heading))?;

    let mut paragraph: Vec<&str> = Vec::new();
    for line in text.lines().skip(heading_line + 1) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        paragraph.push(trimmed);
    }

    if paragraph.is_empty() {
        None
    } else {
        Some(truncate_chars(&paragraph.join(" "), DESCRIPTION_CAP))
    }
}

/// Truncate to `cap` characters, appending an ellipsis when anything was cut.
fn truncate_chars(text: &str, cap: usize) -> String {
    if text.chars().count() <= cap {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(cap).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawModelRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_transform_model_with_all_fields() {
        let raw = record(json!({
            "id": "org/some-model",
            "author": "org",
            "private": false,
            "downloads": 50000,
            "likes": 42,
            "lastModified": "2024-01-15T10:30:00Z",
            "tags": ["nlp", "transformers"],
            "pipeline_tag": "text-generation"
        }));

        let model = transform_model(&raw).unwrap();

        assert_eq!(model.id, "org/some-model");
        assert_eq!(model.name, "org/some-model");
        assert_eq!(model.creator, Some("org".to_string()));
        assert_eq!(model.downloads, 50000);
        assert_eq!(model.likes, Some(42));
        assert_eq!(model.last_modified, Some("2024-01-15T10:30:00Z".to_string()));
        assert_eq!(model.private, Some(false));
        assert_eq!(model.tags, vec!["nlp", "transformers"]);
        assert_eq!(model.description, Some("text-generation".to_string()));
    }

    #[test]
    fn test_transform_model_missing_id_returns_none() {
        assert!(transform_model(&record(json!({"downloads": 10}))).is_none());
        assert!(transform_model(&record(json!({"id": "  "}))).is_none());
        // A wrong-typed id is the one hard skip condition
        assert!(transform_model(&record(json!({"id": 12345, "downloads": 10}))).is_none());
    }

    #[test]
    fn test_transform_model_accepts_legacy_model_id_key() {
        let model = transform_model(&record(json!({"modelId": "org/legacy"}))).unwrap();
        assert_eq!(model.id, "org/legacy");
    }

    #[test]
    fn test_transform_model_id_only_defaults_everything_else() {
        let model = transform_model(&record(json!({"id": "gpt2"}))).unwrap();

        assert_eq!(model.id, "gpt2");
        assert_eq!(model.creator, None);
        assert_eq!(model.description, None);
        assert!(model.tags.is_empty());
        assert_eq!(model.downloads, 0);
        assert_eq!(model.likes, None);
        assert_eq!(model.last_modified, None);
        assert_eq!(model.private, None);
        assert_eq!(model.icon_url, None);
    }

    #[test]
    fn test_creator_derived_from_namespaced_id() {
        let model = transform_model(&record(json!({"id": "someorg/model"}))).unwrap();
        assert_eq!(model.creator, Some("someorg".to_string()));
    }

    #[test]
    fn test_tags_coercion_keeps_scalars_drops_structures() {
        let model = transform_model(&record(json!({
            "id": "x",
            "tags": ["nlp", 2024, 3.5, {"nested": true}, ["list"], null]
        })))
        .unwrap();

        assert_eq!(model.tags, vec!["nlp", "2024", "3.5"]);
    }

    #[test]
    fn test_icon_for_known_creator() {
        let model = transform_model(&record(json!({"id": "mistralai/some-model"}))).unwrap();
        assert_eq!(model.icon_url, Some("icons/mistral-icon.png".to_string()));

        let model = transform_model(&record(json!({"id": "unknown-org/model"}))).unwrap();
        assert_eq!(model.icon_url, None);
    }

    #[test]
    fn test_description_prefers_card_summary_key() {
        let model = transform_model(&record(json!({
            "id": "x",
            "pipeline_tag": "text-generation",
            "cardData": {"model-summary": "A concise summary."}
        })))
        .unwrap();

        assert_eq!(model.description, Some("A concise summary.".to_string()));
    }

    #[test]
    fn test_description_by_language_object_resolves_en() {
        let model = transform_model(&record(json!({
            "id": "x",
            "cardData": {"description": {"fr": "Un modèle.", "en": "A model."}}
        })))
        .unwrap();

        assert_eq!(model.description, Some("A model.".to_string()));
    }

    #[test]
    fn test_description_falls_back_to_pipeline_tag() {
        let model = transform_model(&record(json!({
            "id": "x",
            "pipeline_tag": "image-classification",
            "cardData": {"license": "mit"}
        })))
        .unwrap();

        assert_eq!(model.description, Some("image-classification".to_string()));
    }

    #[test]
    fn test_description_from_card_text_model_summary_heading() {
        let card = "# Intro\n\nsome preamble\n\n## Model Summary\n\nThis model does things.\nQuite well.\n\n## Usage\n...";
        let model = transform_model(&record(json!({"id": "x", "cardData": card}))).unwrap();

        assert_eq!(
            model.description,
            Some("This model does things. Quite well.".to_string())
        );
    }

    #[test]
    fn test_description_from_card_text_truncates_without_heading() {
        let long_text = "word ".repeat(100);
        let model =
            transform_model(&record(json!({"id": "x", "cardData": long_text}))).unwrap();

        let description = model.description.unwrap();
        assert!(description.ends_with('…'));
        assert_eq!(description.chars().count(), DESCRIPTION_CAP + 1);
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("héllo", 10), "héllo");
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo…");
    }

    #[test]
    fn test_transform_detail_collects_file_names() {
        let detail = transform_detail(&record(json!({
            "id": "org/model",
            "pipeline_tag": "text-generation",
            "cardData": {"license": "apache-2.0"},
            "siblings": [
                {"rfilename": "config.json", "size": 100},
                {"rfilename": "model.safetensors"},
                {"size": 5}
            ]
        })))
        .unwrap();

        assert_eq!(detail.files, vec!["config.json", "model.safetensors"]);
        assert_eq!(detail.pipeline_tag, Some("text-generation".to_string()));
        assert_eq!(detail.card_data.unwrap()["license"], "apache-2.0");
        // pipeline tag doubles as the description when the card has no summary
        assert_eq!(detail.model.description, Some("text-generation".to_string()));
    }

    #[test]
    fn test_transform_detail_missing_id_returns_none() {
        assert!(transform_detail(&record(json!({"siblings": []}))).is_none());
    }
}
