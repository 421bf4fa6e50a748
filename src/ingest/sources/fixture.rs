//! JSON-fixture signal source for tests and local runs. Real harvesters
//! live in the host; they only need to speak `SignalSource`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::counter;

use crate::ingest::types::{RawSourceItem, SignalSource};

pub struct FixtureSource {
    name: &'static str,
    body: String,
}

impl FixtureSource {
    /// Takes its own copy so fixtures do not need a `'static` body.
    pub fn new(name: &'static str, json: &str) -> Self {
        Self {
            name,
            body: json.to_string(),
        }
    }

    fn parse_items(&self) -> Result<Vec<RawSourceItem>> {
        let items: Vec<RawSourceItem> =
            serde_json::from_str(&self.body).context("parsing pulse fixture json")?;
        counter!("pulse_items_total").increment(items.len() as u64);
        Ok(items)
    }
}

#[async_trait]
impl SignalSource for FixtureSource {
    async fn fetch_latest(&self) -> Result<Vec<RawSourceItem>> {
        self.parse_items()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
