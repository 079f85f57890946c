//! Conversion from raw match rows to `Document`s.

use serde::Deserialize;
use solace_core::constants::METADATA_TOPIC_KEY;
use solace_core::models::{Document, Metadata};
use solace_core::topic::Topic;
use tracing::warn;

/// One row returned by the similarity-search function.
///
/// Every field is optional so a partial row still converts. Rows whose
/// fields have the wrong JSON type are dropped by [`parse_row`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRow {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub similarity: Option<f64>,
}

/// Decode one raw row, dropping it with a warning when a field has the
/// wrong type (e.g. `"metadata": "topic=anxiety"`).
pub fn parse_row(value: serde_json::Value) -> Option<MatchRow> {
    match serde_json::from_value::<MatchRow>(value) {
        Ok(row) => Some(row),
        Err(e) => {
            warn!(error = %e, "skipping malformed match row");
            None
        }
    }
}

/// Convert a row into a document.
///
/// - Missing content: the row is skipped (`None`) with a warning.
/// - Missing id: the blake3 hash of the content stands in.
/// - Missing, non-string or unknown `metadata.topic`: `topic = None`.
/// - Missing similarity: score 0.0.
pub fn row_to_document(row: MatchRow) -> Option<Document> {
    let Some(content) = row.content else {
        warn!(id = ?row.id, "skipping match row without content");
        return None;
    };

    let id = match row.id {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => blake3::hash(content.as_bytes()).to_hex().to_string(),
    };

    let metadata = row.metadata.unwrap_or_default();
    let topic = metadata
        .get(METADATA_TOPIC_KEY)
        .and_then(|v| v.as_str())
        .and_then(Topic::from_label);

    let mut doc = Document::new(id, content, row.similarity.unwrap_or(0.0)).with_topic(topic);
    doc.metadata = metadata;
    Some(doc)
}
