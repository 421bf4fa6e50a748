//! # Authority Scoring
//!
//! Maps a resolved category plus item metadata to a trust/relevance score
//! in `[1.0, 10.0]` with one decimal place of precision.
//!
//! - Category base weights come from injected config; a category missing
//!   from the table scores `default_weight`.
//! - Papers cited more than `citation_threshold` times earn `citation_bonus`.
//! - Sources on the trusted allowlist earn `trusted_bonus`; lookup is
//!   case-insensitive with alias resolution and a substring fallback.
//! - The clamp to `[1.0, 10.0]` is applied after every individual bonus
//!   addition, then the result is rounded to one decimal.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::ingest::types::SignalMetadata;
use crate::signal::PulseCategory;

pub const SCORE_MIN: f32 = 1.0;
pub const SCORE_MAX: f32 = 10.0;

/// Configuration for authority scoring, loaded from TOML or defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorityConfig {
    /// Base weight for categories absent from `base_weights`.
    #[serde(default = "default_default_weight")]
    pub default_weight: f32,
    /// Base weight per category, keyed by the category's wire name.
    #[serde(default)]
    pub base_weights: HashMap<String, f32>,
    /// Citation count must strictly exceed this for the paper bonus.
    #[serde(default = "default_citation_threshold")]
    pub citation_threshold: u32,
    #[serde(default = "default_citation_bonus")]
    pub citation_bonus: f32,
    #[serde(default = "default_trusted_bonus")]
    pub trusted_bonus: f32,
    /// Canonical trusted outlets, normalized lowercase.
    #[serde(default)]
    pub trusted_sources: HashSet<String>,
    /// Aliases mapping alternative spellings/domains → canonical names.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

fn default_default_weight() -> f32 {
    1.0
}
fn default_citation_threshold() -> u32 {
    100
}
fn default_citation_bonus() -> f32 {
    0.5
}
fn default_trusted_bonus() -> f32 {
    1.0
}

impl AuthorityConfig {
    /// Load configuration from a TOML file.
    /// Falls back to `default_seed()` on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s).unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// Score one item.
    ///
    /// Steps:
    /// 1. Category base weight (or `default_weight`), clamped.
    /// 2. Citation bonus for papers, clamped.
    /// 3. Trusted-source bonus, clamped.
    /// 4. Round to one decimal place.
    pub fn score_for(&self, category: PulseCategory, meta: &SignalMetadata) -> f32 {
        let mut score = self
            .base_weights
            .get(category.as_str())
            .copied()
            .unwrap_or(self.default_weight)
            .clamp(SCORE_MIN, SCORE_MAX);

        // Clamp after each bonus so an uncapped intermediate sum never
        // carries forward into the next addition.
        if category == PulseCategory::Paper {
            if let Some(cited) = meta.cited_by_count {
                if cited > self.citation_threshold {
                    score = (score + self.citation_bonus).clamp(SCORE_MIN, SCORE_MAX);
                }
            }
        }

        if let Some(source) = meta.source_name.as_deref() {
            if self.is_trusted(source) {
                score = (score + self.trusted_bonus).clamp(SCORE_MIN, SCORE_MAX);
            }
        }

        round1(score)
    }

    /// Trusted-source membership.
    ///
    /// Fallback order: alias → exact match → substring match → miss.
    pub fn is_trusted(&self, source: &str) -> bool {
        let s = normalize(source);
        if s.is_empty() {
            return false;
        }

        if let Some(canon) = self.aliases.get(&s) {
            if self.trusted_sources.contains(&normalize(canon)) {
                return true;
            }
        }

        if self.trusted_sources.contains(&s) {
            return true;
        }

        self.trusted_sources.iter().any(|t| s.contains(t.as_str()))
    }

    /// Built-in seed: spec base weights plus a small curated set of
    /// top-tier outlets. Used as fallback if no config is found.
    pub(crate) fn default_seed() -> Self {
        let mut base_weights = HashMap::new();
        for (k, v) in [
            ("paper", 10.0),
            ("report", 8.5),
            ("news", 7.0),
            ("analysis", 5.0),
            ("trend", 3.0),
        ] {
            base_weights.insert(k.to_string(), v);
        }

        let mut trusted_sources = HashSet::new();
        for s in [
            "nature",
            "science",
            "reuters",
            "associated press",
            "bloomberg",
            "financial times",
            "wall street journal",
            "the economist",
            "mit technology review",
            "the lancet",
        ] {
            trusted_sources.insert(s.to_string());
        }

        // Alias keys must already be in normalized form (lowercase, no
        // separators); they are matched against normalized input.
        let mut aliases = HashMap::new();
        for (a, c) in [
            ("ap", "associated press"),
            ("ap news", "associated press"),
            ("wsj", "wall street journal"),
            ("ft", "financial times"),
            ("sciencemag", "science"),
            ("mit tech review", "mit technology review"),
            ("lancet", "the lancet"),
        ] {
            aliases.insert(a.to_string(), c.to_string());
        }

        Self {
            default_weight: 1.0,
            base_weights,
            citation_threshold: 100,
            citation_bonus: 0.5,
            trusted_bonus: 1.0,
            trusted_sources,
            aliases,
        }
    }
}

/// Normalize a source name: lowercase, separators to spaces, collapse runs.
fn normalize(s: &str) -> String {
    let mut out = s.trim().to_ascii_lowercase();

    for ch in ['—', '–', '-', '_', '/', '\\'] {
        out = out.replace(ch, " ");
    }
    out = out.replace(['\n', '\r', '\t', '.', ',', '\''], " ");

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Round to one decimal place.
fn round1(x: f32) -> f32 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> AuthorityConfig {
        AuthorityConfig::default_seed()
    }

    fn meta(cited: Option<u32>, source: Option<&str>) -> SignalMetadata {
        SignalMetadata {
            cited_by_count: cited,
            source_name: source.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn base_weights_match_the_tiers() {
        let c = cfg();
        let m = SignalMetadata::default();
        assert_eq!(c.score_for(PulseCategory::Paper, &m), 10.0);
        assert_eq!(c.score_for(PulseCategory::Report, &m), 8.5);
        assert_eq!(c.score_for(PulseCategory::News, &m), 7.0);
        assert_eq!(c.score_for(PulseCategory::Analysis, &m), 5.0);
        assert_eq!(c.score_for(PulseCategory::Trend, &m), 3.0);
    }

    #[test]
    fn citation_bonus_is_capped() {
        let c = cfg();
        let s = c.score_for(PulseCategory::Paper, &meta(Some(150), None));
        assert_eq!(s, 10.0);
    }

    #[test]
    fn citation_bonus_requires_strictly_more_than_threshold() {
        let mut c = cfg();
        c.base_weights.insert("paper".into(), 9.0);
        assert_eq!(c.score_for(PulseCategory::Paper, &meta(Some(100), None)), 9.0);
        assert_eq!(c.score_for(PulseCategory::Paper, &meta(Some(101), None)), 9.5);
    }

    #[test]
    fn citation_bonus_only_applies_to_papers() {
        let c = cfg();
        let s = c.score_for(PulseCategory::News, &meta(Some(500), None));
        assert_eq!(s, 7.0);
    }

    #[test]
    fn trusted_source_bonus() {
        let c = cfg();
        let s = c.score_for(PulseCategory::News, &meta(None, Some("Nature")));
        assert_eq!(s, 8.0);
    }

    #[test]
    fn alias_and_substring_lookup() {
        let c = cfg();
        assert!(c.is_trusted("WSJ"));
        assert!(c.is_trusted("The Wall Street Journal"));
        assert!(c.is_trusted("nature.com"));
        assert!(!c.is_trusted("Random Blog"));
        assert!(!c.is_trusted(""));
    }

    #[test]
    fn double_bonus_clamps_after_each_addition() {
        let c = cfg();
        // paper 10.0 → +0.5 clamps to 10.0 → +1.0 clamps to 10.0
        let s = c.score_for(PulseCategory::Paper, &meta(Some(150), Some("Nature")));
        assert_eq!(s, 10.0);
        // report 8.5 + 1.0 = 9.5, no intermediate overflow
        let s = c.score_for(PulseCategory::Report, &meta(None, Some("Reuters")));
        assert_eq!(s, 9.5);
    }

    #[test]
    fn missing_category_uses_default_weight() {
        let mut c = cfg();
        c.base_weights.remove("trend");
        let s = c.score_for(PulseCategory::Trend, &SignalMetadata::default());
        assert_eq!(s, 1.0);
    }
}
