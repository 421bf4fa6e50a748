// src/lib.rs
// Public library surface for the pulse ingestion & scoring pipeline.
// No network API of its own: the host ingestion function feeds raw items in
// and persists the staged records that come out.

pub mod assemble;
pub mod authority;
pub mod error;
pub mod fingerprint;
pub mod normalize;
pub mod signal;
pub mod staging;
pub mod sufficiency;
pub mod taxonomy;

// Harvest boundary: source trait, scoring config loading, orchestration
pub mod ingest;

// ---- Re-exports for stable public API ----
pub use crate::assemble::{BatchFailure, IngestReport, PulsePipeline};
pub use crate::error::{PulseError, PulseResult};
pub use crate::fingerprint::content_fingerprint;
pub use crate::ingest::config::ScoringConfig;
pub use crate::ingest::types::{RawSourceItem, SignalMetadata, SignalSource};
pub use crate::ingest::{harvest_once, HarvestReport};
pub use crate::signal::{PulseCategory, PulseDraft, StagedSignal};
pub use crate::staging::StagingPolicy;
pub use crate::sufficiency::{ScoredCandidate, SufficiencyPolicy};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR PULSE_ENV in {local, development, dev})
///   - PULSE_DEV_LOG=1
pub fn enable_dev_tracing() {
    let dev_flag = std::env::var("PULSE_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("PULSE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pulse=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
