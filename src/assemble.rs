//! # Pulse Item Assembly
//! Pure, testable pipeline that maps one `RawSourceItem` → `PulseDraft`
//! (categorize, score, normalize) and batches of raw items → staged records
//! with per-item failure isolation and in-batch dedup by content hash.
//! No I/O; suitable for unit tests and offline evaluation.

use std::collections::HashSet;
use std::time::Instant;

use chrono::{DateTime, Utc};
use metrics::{counter, histogram};

use crate::error::PulseError;
use crate::fingerprint::anon_id;
use crate::ingest::config::ScoringConfig;
use crate::ingest::types::RawSourceItem;
use crate::normalize::normalize_opt;
use crate::signal::{PulseDraft, StagedSignal};
use crate::staging::stage;

/// One failed item in a batch. Siblings are unaffected.
#[derive(Debug)]
pub struct BatchFailure {
    pub index: usize,
    pub source_name: String,
    pub error: PulseError,
}

/// Outcome of a batch run. No ordering guarantee between items is promised
/// beyond the input order being preserved for the staged records.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub staged: Vec<StagedSignal>,
    pub failures: Vec<BatchFailure>,
    /// Items dropped because an earlier item in the same batch produced the
    /// same content hash.
    pub deduped: usize,
}

/// The assembly pipeline with its injected configuration. All methods are
/// synchronous and free of shared mutable state; independent items may be
/// processed concurrently without coordination.
#[derive(Debug, Clone)]
pub struct PulsePipeline {
    config: ScoringConfig,
}

impl PulsePipeline {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Pipeline with the built-in production tables.
    pub fn seeded() -> Self {
        Self::new(ScoringConfig::default_seed())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Assemble one raw item into a draft record.
    ///
    /// Steps, in order: resolve category, score (category + metadata, with
    /// the item's source name as fallback when the side-channel carries
    /// none), normalize title and summary, derive the creation-time flags.
    /// Malformed text fields degrade to empty strings; this never fails.
    pub fn assemble(&self, item: &RawSourceItem) -> PulseDraft {
        let category = self.config.taxonomy.resolve(&item.raw_category);

        let mut meta = item.metadata.clone().unwrap_or_default();
        if meta.source_name.is_none() {
            meta.source_name = Some(item.source_name.clone());
        }
        let score = self.config.authority.score_for(category, &meta);

        PulseDraft {
            title: normalize_opt(item.title.as_deref()),
            summary: normalize_opt(item.summary.as_deref()),
            url: item.url.clone(),
            source_name: item.source_name.clone(),
            content_type: category,
            authority_score: score,
            veracity_verified: false,
            is_high_value: PulseDraft::high_value(score),
        }
    }

    /// Assemble and stage a whole batch with isolate-and-continue semantics:
    /// a failing item is reported and its siblings proceed. Items whose
    /// content hash repeats within the batch are dropped as duplicates.
    pub fn ingest_batch(&self, items: &[RawSourceItem], now: DateTime<Utc>) -> IngestReport {
        let t0 = Instant::now();
        let mut report = IngestReport::default();
        let mut seen_hashes: HashSet<String> = HashSet::new();

        for (index, item) in items.iter().enumerate() {
            let draft = self.assemble(item);
            match stage(draft, now, &self.config.staging) {
                Ok(signal) => {
                    if !seen_hashes.insert(signal.content_hash.clone()) {
                        report.deduped += 1;
                        continue;
                    }
                    let id = &signal.content_hash[..12];
                    tracing::debug!(
                        target: "pulse",
                        %id,
                        kind = signal.content_type.describe(),
                        score = signal.authority_score,
                        "staged"
                    );
                    report.staged.push(signal);
                }
                Err(error) => {
                    tracing::warn!(
                        target: "pulse",
                        index,
                        source = %item.source_name,
                        id = %anon_id(item.title.as_deref().unwrap_or_default()),
                        error = %error,
                        "item failed, batch continues"
                    );
                    report.failures.push(BatchFailure {
                        index,
                        source_name: item.source_name.clone(),
                        error,
                    });
                }
            }
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("pulse_assemble_ms").record(ms);
        counter!("pulse_assembled_total").increment(report.staged.len() as u64);
        counter!("pulse_failed_total").increment(report.failures.len() as u64);
        counter!("pulse_dedup_total").increment(report.deduped as u64);

        report
    }
}
