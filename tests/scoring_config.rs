// tests/scoring_config.rs
use pulse_ingest::ingest::config::load_scoring_from;
use pulse_ingest::{PulseCategory, PulsePipeline, RawSourceItem, SignalMetadata};

fn raw(category: &str, source: &str) -> RawSourceItem {
    RawSourceItem {
        title: Some("Title".into()),
        summary: Some("Summary".into()),
        url: None,
        source_name: source.into(),
        raw_category: category.into(),
        metadata: None,
    }
}

#[test]
fn toml_file_replaces_the_seed_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scoring.toml");
    std::fs::write(
        &path,
        r#"
[staging]
ttl_hours = 48

[authority]
default_weight = 2.0
trusted_bonus = 1.0

[authority.base_weights]
paper = 9.0
blogpost = 4.5

[taxonomy]
fallback = "trend"

[[taxonomy.rules]]
patterns = ["quantum"]
category = "paper"

[[taxonomy.rules]]
patterns = ["blog"]
category = "analysis"
"#,
    )
    .unwrap();

    let cfg = load_scoring_from(&path).unwrap();
    assert_eq!(cfg.staging.ttl_hours, 48);
    assert_eq!(cfg.taxonomy.resolve("Quantum Weekly"), PulseCategory::Paper);
    assert_eq!(cfg.taxonomy.resolve("Some Blog"), PulseCategory::Analysis);
    // category missing from the injected weight table → default_weight
    let s = cfg
        .authority
        .score_for(PulseCategory::News, &SignalMetadata::default());
    assert_eq!(s, 2.0);

    let pipeline = PulsePipeline::new(cfg);
    let d = pipeline.assemble(&raw("quantum computing", "Nobody"));
    assert_eq!(d.content_type, PulseCategory::Paper);
    assert_eq!(d.authority_score, 9.0);
}

#[test]
fn json_file_parses_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scoring.json");
    std::fs::write(
        &path,
        r#"{
            "staging": {"ttl_hours": 12},
            "authority": {"trusted_sources": ["example wire"]}
        }"#,
    )
    .unwrap();

    let cfg = load_scoring_from(&path).unwrap();
    assert_eq!(cfg.staging.ttl_hours, 12);
    assert!(cfg.authority.is_trusted("Example Wire"));
    assert!(!cfg.authority.is_trusted("Reuters"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_scoring_from(&dir.path().join("nope.toml")).is_err());
}
