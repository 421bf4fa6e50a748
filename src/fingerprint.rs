// src/fingerprint.rs
//! Content fingerprinting for deduplication.

use sha2::{Digest, Sha256};

use crate::error::{PulseError, PulseResult};

/// SHA-256 hex digest of the trimmed, lowercased text. Casing and
/// surrounding whitespace do not change the fingerprint; different text
/// yields a different digest with overwhelming probability.
pub fn content_fingerprint(text: &str) -> PulseResult<String> {
    let canonical = text.trim().to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();

    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest.iter() {
        use std::fmt::Write as _;
        write!(&mut out, "{:02x}", b).map_err(|e| PulseError::Fingerprint(e.to_string()))?;
    }
    Ok(out)
}

/// Short anonymized id for log lines. Raw harvested text is never logged;
/// only this prefix is.
pub fn anon_id(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.trim().to_lowercase().as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
