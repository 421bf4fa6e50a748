// tests/staging_expiry.rs
use chrono::{Duration, TimeZone, Utc};
use pulse_ingest::staging::{stage, StagingPolicy};
use pulse_ingest::{content_fingerprint, PulseCategory, PulseDraft};

fn draft() -> PulseDraft {
    PulseDraft {
        title: "AI Breakthrough".into(),
        summary: "Transformer variant cuts training cost by half.".into(),
        url: Some("https://arxiv.org/abs/2301.0001".into()),
        source_name: "arXiv Sanity".into(),
        content_type: PulseCategory::Paper,
        authority_score: 10.0,
        veracity_verified: false,
        is_high_value: true,
    }
}

#[test]
fn lifecycle_window_uses_the_policy_ttl() {
    let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    let s = stage(draft(), now, &StagingPolicy::default()).unwrap();
    assert_eq!(s.created_at, now);
    assert_eq!(s.expires_at - s.created_at, Duration::hours(72));

    assert!(!s.is_expired(now));
    assert!(!s.is_expired(s.expires_at - Duration::seconds(1)));
    assert!(s.is_expired(s.expires_at));
    assert!(s.is_expired(s.expires_at + Duration::days(1)));
}

#[test]
fn content_hash_is_the_fingerprint_of_the_normalized_text() {
    let now = Utc::now();
    let s = stage(draft(), now, &StagingPolicy::default()).unwrap();
    let expected = content_fingerprint(&format!("{} {}", s.title, s.summary)).unwrap();
    assert_eq!(s.content_hash, expected);
}

#[test]
fn fingerprint_is_stable_under_trim_and_case() {
    for s in ["AI Breakthrough", "  Mixed CASE  text ", "déjà vu"] {
        let canon = s.trim().to_lowercase();
        assert_eq!(
            content_fingerprint(s).unwrap(),
            content_fingerprint(&canon).unwrap()
        );
    }
}

#[test]
fn draft_fields_carry_through_unchanged() {
    let now = Utc::now();
    let d = draft();
    let s = stage(d.clone(), now, &StagingPolicy::default()).unwrap();
    assert_eq!(s.title, d.title);
    assert_eq!(s.summary, d.summary);
    assert_eq!(s.url, d.url);
    assert_eq!(s.source_name, d.source_name);
    assert_eq!(s.content_type, d.content_type);
    assert_eq!(s.authority_score, d.authority_score);
    assert!(!s.veracity_verified);
    assert!(s.is_high_value);
}
