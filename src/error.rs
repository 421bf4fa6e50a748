//! Typed errors for the pulse pipeline.
//!
//! Malformed text and unmapped categories are not errors (they degrade to
//! empty strings / the fallback tier). The one fatal per-item condition is a
//! failed fingerprint, which the host must be able to tell apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PulseError {
    /// Content fingerprint could not be computed. Fatal for that item: a
    /// missing fingerprint breaks the dedup key.
    #[error("fingerprint error: {0}")]
    Fingerprint(String),
}

pub type PulseResult<T> = std::result::Result<T, PulseError>;
