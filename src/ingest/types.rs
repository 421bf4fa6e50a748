// src/ingest/types.rs
use anyhow::Result;
use std::collections::HashMap;

/// One harvested item as delivered by an external source. All text fields
/// are untrusted and may carry markup or whitespace noise.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct RawSourceItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Human-readable provider label, e.g. "Nature", "Reuters".
    pub source_name: String,
    /// Free-text category label from the origin feed; vocabulary varies
    /// across sources.
    pub raw_category: String,
    #[serde(default)]
    pub metadata: Option<SignalMetadata>,
}

/// Typed view of the provider side-channel. Fields the pipeline consults
/// are named; everything else rides along untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SignalMetadata {
    #[serde(default)]
    pub cited_by_count: Option<u32>,
    /// Overrides the item's `source_name` for the trust lookup when set.
    #[serde(default)]
    pub source_name: Option<String>,
    /// Provider-specific fields the pipeline never reads.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[async_trait::async_trait]
pub trait SignalSource: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<RawSourceItem>>;
    fn name(&self) -> &'static str;
}
