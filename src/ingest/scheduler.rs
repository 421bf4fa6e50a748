// src/ingest/scheduler.rs
use crate::assemble::PulsePipeline;
use crate::ingest::types::SignalSource;
use crate::ingest::{harvest_once, HarvestReport};
use metrics::counter;
use tokio::task::JoinHandle;

#[derive(Clone, Copy, Debug)]
pub struct HarvestSchedulerCfg {
    pub interval_secs: u64,
}

/// Spawn a lightweight loop that re-harvests on a fixed interval and hands
/// each report to the host's sink (typically the staging-table insert).
/// Expiry purging stays with the external janitor; this covers only the
/// "trigger a fresh harvest" half of the lifecycle contract.
pub fn spawn_harvest_loop<F>(
    cfg: HarvestSchedulerCfg,
    sources: Vec<Box<dyn SignalSource>>,
    pipeline: PulsePipeline,
    mut on_report: F,
) -> JoinHandle<()>
where
    F: FnMut(HarvestReport) + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker =
            tokio::time::interval(std::time::Duration::from_secs(cfg.interval_secs.max(1)));
        loop {
            ticker.tick().await;

            let out = harvest_once(&sources, &pipeline).await;
            counter!("pulse_harvest_runs_total").increment(1);
            tracing::info!(
                target: "pulse",
                staged = out.report.staged.len(),
                source_errors = out.source_errors,
                "scheduled harvest tick"
            );
            on_report(out);
        }
    })
}
