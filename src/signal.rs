//! signal.rs — Output-side types: the fixed content taxonomy, the assembled
//! draft record, and the staged record contract consumed by the store and
//! the janitor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Items scoring at or above this are flagged high-value at creation.
pub const HIGH_VALUE_THRESHOLD: f32 = 8.5;

/// Fixed content taxonomy, ordered from highest to lowest baseline authority.
/// Every harvested item resolves to exactly one category; unmatched labels
/// fall back to `Trend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PulseCategory {
    Paper,
    Report,
    News,
    Analysis,
    Trend,
}

impl PulseCategory {
    /// Lowercase wire name, also the key used in scoring config tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Report => "report",
            Self::News => "news",
            Self::Analysis => "analysis",
            Self::Trend => "trend",
        }
    }

    /// Short human label for log lines and admin views.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Paper => "peer-reviewed paper or preprint",
            Self::Report => "industry or institutional report",
            Self::News => "newswire coverage",
            Self::Analysis => "expert analysis or review",
            Self::Trend => "unverified trend item",
        }
    }
}

/// Assembled record, ready for staging. The staging store assigns the row id;
/// `staging::stage` stamps the content hash and lifecycle timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseDraft {
    pub title: String,
    pub summary: String,
    pub url: Option<String>,
    pub source_name: String,
    pub content_type: PulseCategory,
    /// In [1.0, 10.0], one decimal place.
    pub authority_score: f32,
    /// Always false at creation; flipped only by downstream verification.
    pub veracity_verified: bool,
    /// Derived: `authority_score >= HIGH_VALUE_THRESHOLD`. Must never
    /// diverge from the score.
    pub is_high_value: bool,
}

impl PulseDraft {
    pub fn high_value(score: f32) -> bool {
        score >= HIGH_VALUE_THRESHOLD
    }
}

/// Row shape for the staging buffer. Never mutated in place once inserted,
/// except for the verification flag (out of this crate's hands).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedSignal {
    /// Dedup key: fingerprint of the normalized text.
    pub content_hash: String,
    pub title: String,
    pub summary: String,
    pub url: Option<String>,
    pub source_name: String,
    pub content_type: PulseCategory,
    pub authority_score: f32,
    pub veracity_verified: bool,
    pub is_high_value: bool,
    pub created_at: DateTime<Utc>,
    /// Retention horizon; rows past this are purged by the janitor.
    pub expires_at: DateTime<Utc>,
}

impl StagedSignal {
    /// Retention contract: a row is expired once `expires_at` has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
