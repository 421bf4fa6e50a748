// src/ingest/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::authority::AuthorityConfig;
use crate::staging::StagingPolicy;
use crate::taxonomy::TaxonomyConfig;

const ENV_PATH: &str = "PULSE_SCORING_CONFIG_PATH";

/// All injected pipeline configuration in one place: taxonomy rules,
/// authority weights, staging retention.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "TaxonomyConfig::default_seed")]
    pub taxonomy: TaxonomyConfig,
    #[serde(default = "AuthorityConfig::default_seed")]
    pub authority: AuthorityConfig,
    #[serde(default)]
    pub staging: StagingPolicy,
}

impl ScoringConfig {
    /// Built-in production tables.
    pub fn default_seed() -> Self {
        Self {
            taxonomy: TaxonomyConfig::default_seed(),
            authority: AuthorityConfig::default_seed(),
            staging: StagingPolicy::default(),
        }
    }
}

/// Load scoring config from an explicit path. Supports TOML or JSON formats.
pub fn load_scoring_from(path: &Path) -> Result<ScoringConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading scoring config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_scoring(&content, ext.as_str())
}

/// Load scoring config using env var + fallbacks:
/// 1) $PULSE_SCORING_CONFIG_PATH
/// 2) config/pulse_scoring.toml
/// 3) config/pulse_scoring.json
/// 4) built-in seed
pub fn load_scoring_default() -> Result<ScoringConfig> {
    if let Ok(p) = std::env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_scoring_from(&pb);
        } else {
            return Err(anyhow!(
                "PULSE_SCORING_CONFIG_PATH points to non-existent path"
            ));
        }
    }
    let toml_p = PathBuf::from("config/pulse_scoring.toml");
    if toml_p.exists() {
        return load_scoring_from(&toml_p);
    }
    let json_p = PathBuf::from("config/pulse_scoring.json");
    if json_p.exists() {
        return load_scoring_from(&json_p);
    }
    Ok(ScoringConfig::default_seed())
}

fn parse_scoring(s: &str, hint_ext: &str) -> Result<ScoringConfig> {
    // Try TOML first if hinted or content looks like toml.
    let try_toml = hint_ext == "toml" || s.contains("[authority]") || s.contains("[taxonomy]");
    if try_toml {
        if let Ok(v) = toml::from_str(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = serde_json::from_str(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = toml::from_str(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported scoring config format"))
}
