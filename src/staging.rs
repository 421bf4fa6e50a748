// src/staging.rs
//! Staging preparation: stamp the dedup hash and lifecycle timestamps on an
//! assembled draft. Durability, uniqueness enforcement, and expiry purging
//! belong to the external store and janitor; this module only honors the
//! `expires_at` contract they consume.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::error::PulseResult;
use crate::fingerprint::content_fingerprint;
use crate::signal::{PulseDraft, StagedSignal};

/// Retention policy for the staging buffer.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StagingPolicy {
    /// Hours until a staged row expires.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
}

fn default_ttl_hours() -> i64 {
    72
}

impl Default for StagingPolicy {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}

/// Stamp hash and lifecycle timestamps on a draft. The fingerprint covers
/// the normalized title and summary; a fingerprint failure is fatal for
/// this item only.
pub fn stage(draft: PulseDraft, now: DateTime<Utc>, policy: &StagingPolicy) -> PulseResult<StagedSignal> {
    let basis = format!("{} {}", draft.title, draft.summary);
    let content_hash = content_fingerprint(&basis)?;

    Ok(StagedSignal {
        content_hash,
        title: draft.title,
        summary: draft.summary,
        url: draft.url,
        source_name: draft.source_name,
        content_type: draft.content_type,
        authority_score: draft.authority_score,
        veracity_verified: draft.veracity_verified,
        is_high_value: draft.is_high_value,
        created_at: now,
        expires_at: now + Duration::hours(policy.ttl_hours),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::PulseCategory;

    fn draft(title: &str, summary: &str) -> PulseDraft {
        PulseDraft {
            title: title.into(),
            summary: summary.into(),
            url: None,
            source_name: "Test".into(),
            content_type: PulseCategory::Trend,
            authority_score: 3.0,
            veracity_verified: false,
            is_high_value: false,
        }
    }

    #[test]
    fn stamps_hash_and_window() {
        let now = Utc::now();
        let s = stage(draft("A", "B"), now, &StagingPolicy::default()).unwrap();
        assert_eq!(s.content_hash.len(), 64);
        assert_eq!(s.created_at, now);
        assert_eq!(s.expires_at, now + Duration::hours(72));
        assert!(!s.is_expired(now));
        assert!(s.is_expired(s.expires_at));
    }

    #[test]
    fn hash_ignores_casing_of_the_text() {
        let now = Utc::now();
        let a = stage(draft("AI Breakthrough", "Big"), now, &StagingPolicy::default()).unwrap();
        let b = stage(draft("ai breakthrough", "big"), now, &StagingPolicy::default()).unwrap();
        assert_eq!(a.content_hash, b.content_hash);
    }

    #[test]
    fn custom_ttl_is_honored() {
        let now = Utc::now();
        let policy = StagingPolicy { ttl_hours: 1 };
        let s = stage(draft("A", "B"), now, &policy).unwrap();
        assert_eq!(s.expires_at, now + Duration::hours(1));
    }
}
