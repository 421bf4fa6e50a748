// src/ingest/mod.rs
pub mod config;
pub mod scheduler;
pub mod sources;
pub mod types;

use crate::assemble::{IngestReport, PulsePipeline};
use crate::ingest::types::SignalSource;
use metrics::{
    counter, describe_counter, describe_gauge, describe_histogram, gauge,
};
use once_cell::sync::OnceCell;

/// One-time metrics registration (so series show up on the host's exporter).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("pulse_items_total", "Raw items fetched from sources.");
        describe_counter!(
            "pulse_assembled_total",
            "Items assembled and staged successfully."
        );
        describe_counter!("pulse_failed_total", "Per-item assembly/staging failures.");
        describe_counter!(
            "pulse_dedup_total",
            "Items dropped by in-batch content-hash dedup."
        );
        describe_counter!("pulse_source_errors_total", "Source fetch/parse errors.");
        describe_counter!("pulse_harvest_runs_total", "Scheduled harvest passes.");
        describe_counter!(
            "pulse_sufficiency_skips_total",
            "External enrichment calls skipped by the sufficiency gate."
        );
        describe_histogram!("pulse_assemble_ms", "Batch assembly time in milliseconds.");
        describe_gauge!("pulse_last_run_ts", "Unix ts when the pipeline last ran.");
    });
}

/// Outcome of one harvest pass across all sources.
#[derive(Debug, Default)]
pub struct HarvestReport {
    pub report: IngestReport,
    /// Sources that failed to fetch; their siblings still ran.
    pub source_errors: usize,
}

/// Run one harvest using the provided sources and pipeline: fetch from each
/// source with per-source error isolation, then assemble and stage the
/// combined batch.
pub async fn harvest_once(
    sources: &[Box<dyn SignalSource>],
    pipeline: &PulsePipeline,
) -> HarvestReport {
    ensure_metrics_described();

    let mut raw = Vec::new();
    let mut source_errors = 0usize;
    for s in sources {
        match s.fetch_latest().await {
            Ok(mut v) => raw.append(&mut v),
            Err(e) => {
                tracing::warn!(error = ?e, source = s.name(), "source error");
                counter!("pulse_source_errors_total").increment(1);
                source_errors += 1;
            }
        }
    }

    let now = chrono::Utc::now();
    let report = pipeline.ingest_batch(&raw, now);

    gauge!("pulse_last_run_ts").set(now.timestamp() as f64);
    tracing::info!(
        target: "pulse",
        staged = report.staged.len(),
        failed = report.failures.len(),
        deduped = report.deduped,
        source_errors,
        "harvest pass"
    );

    HarvestReport {
        report,
        source_errors,
    }
}
