//! # Category Taxonomy
//!
//! Resolves a free-text, source-supplied category label into one
//! `PulseCategory` via an ordered substring rule table.
//!
//! - Case-insensitive matching, first rule wins, top to bottom.
//! - Unmatched labels fall back to the lowest-trust tier — never an error.
//! - Rules are configuration, injected at construction; `default_seed()`
//!   carries the production table.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::signal::PulseCategory;

/// One priority-ordered rule: any pattern substring-matches → category.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyRule {
    pub patterns: Vec<String>,
    pub category: PulseCategory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyConfig {
    /// Tier used when no rule matches.
    #[serde(default = "default_fallback")]
    pub fallback: PulseCategory,
    /// Evaluated in order; first match wins.
    #[serde(default)]
    pub rules: Vec<TaxonomyRule>,
}

fn default_fallback() -> PulseCategory {
    PulseCategory::Trend
}

impl TaxonomyConfig {
    /// Load from a TOML file.
    /// Falls back to `default_seed()` on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s).unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// Resolve a raw label to its category.
    pub fn resolve(&self, raw_category: &str) -> PulseCategory {
        let label = raw_category.to_lowercase();
        for rule in &self.rules {
            if rule
                .patterns
                .iter()
                .any(|p| label.contains(p.to_lowercase().as_str()))
            {
                return rule.category;
            }
        }
        self.fallback
    }

    /// Production rule table. Order mirrors the baseline authority of each
    /// tier; "ap" sits under a later rule so "paper"/"whitepaper" resolve
    /// before the newswire pattern can fire.
    pub(crate) fn default_seed() -> Self {
        let rules = vec![
            TaxonomyRule {
                patterns: vec!["arxiv".into(), "paper".into(), "journal".into()],
                category: PulseCategory::Paper,
            },
            TaxonomyRule {
                patterns: vec!["report".into(), "whitepaper".into()],
                category: PulseCategory::Report,
            },
            TaxonomyRule {
                patterns: vec!["news".into(), "reuters".into(), "ap".into()],
                category: PulseCategory::News,
            },
            TaxonomyRule {
                patterns: vec!["analysis".into(), "review".into(), "hbr".into()],
                category: PulseCategory::Analysis,
            },
        ];
        Self {
            fallback: PulseCategory::Trend,
            rules,
        }
    }
}
