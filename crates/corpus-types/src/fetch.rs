//! Collaborator contract for corpus acquisition.
//!
//! The pipeline never talks to a network API directly. Anything that can
//! produce raw text for an entity (a Twitter client, a fixture directory,
//! a test stub) implements [`CorpusFetcher`].

use thiserror::Error;

/// Failure to acquire a corpus for one entity.
///
/// The pipeline treats this as "drop this entity from further processing",
/// never as a fatal error for the run.
#[derive(Debug, Error)]
#[error("failed to fetch corpus for {entity}: {reason}")]
pub struct FetchError {
    /// Entity the fetch was attempted for
    pub entity: String,
    /// Human-readable cause from the underlying source
    pub reason: String,
}

impl FetchError {
    pub fn new(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            reason: reason.into(),
        }
    }
}

/// Source of raw corpus text, supplied by the caller.
///
/// Implementations own their own timeout/retry policy and surface failures
/// synchronously as [`FetchError`].
pub trait CorpusFetcher {
    /// Fetch the raw (uncleaned) corpus text for one entity.
    fn fetch_corpus(&self, entity_id: &str) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::new("ghost", "timeline not found");
        assert_eq!(
            err.to_string(),
            "failed to fetch corpus for ghost: timeline not found"
        );
    }
}
