//! # Sufficiency Gate
//!
//! Decides whether previously retrieved results already answer a query well
//! enough to skip a costly external enrichment call. A heuristic, not a
//! guarantee: thresholds are tuned so that skipping only happens with solid
//! existing coverage, and a redundant external call is the accepted failure
//! mode. The gate never mutates the candidate set.

use metrics::counter;
use serde::Deserialize;

/// A previously retrieved result with its similarity to the query in `[0,1]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoredCandidate {
    pub similarity: f32,
    /// Dedup key of the stored result, when known. Used for tracing only.
    #[serde(default)]
    pub content_hash: Option<String>,
}

impl ScoredCandidate {
    pub fn new(similarity: f32) -> Self {
        Self {
            similarity,
            content_hash: None,
        }
    }
}

/// Gate thresholds. The defaults are the binding production values.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SufficiencyPolicy {
    /// Candidates must be strictly above this similarity to count.
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f32,
    /// Minimum number of strong candidates for a skip.
    #[serde(default = "default_min_matches")]
    pub min_matches: usize,
}

fn default_min_similarity() -> f32 {
    0.85
}
fn default_min_matches() -> usize {
    3
}

impl Default for SufficiencyPolicy {
    fn default() -> Self {
        Self {
            min_similarity: default_min_similarity(),
            min_matches: default_min_matches(),
        }
    }
}

impl SufficiencyPolicy {
    /// `true` means existing knowledge suffices and the external call can be
    /// skipped. An empty candidate set is never sufficient; an absent set is
    /// the empty slice.
    pub fn is_sufficient(&self, candidates: &[ScoredCandidate]) -> bool {
        if candidates.is_empty() {
            return false;
        }
        let strong = candidates
            .iter()
            .filter(|c| c.similarity > self.min_similarity)
            .count();
        let sufficient = strong >= self.min_matches;
        if sufficient {
            counter!("pulse_sufficiency_skips_total").increment(1);
            tracing::debug!(
                target: "pulse",
                strong,
                total = candidates.len(),
                "existing results sufficient, skipping external call"
            );
        }
        sufficient
    }
}
