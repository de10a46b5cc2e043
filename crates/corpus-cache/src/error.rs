//! Cache error types.

use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No valid (present and unexpired) entry for the entity.
    ///
    /// Recoverable: the caller fetches from the collaborator and writes
    /// the result back.
    #[error("no valid cache entry for entity: {0}")]
    Miss(String),

    /// Persisting an entry failed.
    ///
    /// The previous entry for the entity, if any, is left intact.
    #[error("failed to persist cache entry for {entity}: {source}")]
    Persistence {
        entity: String,
        #[source]
        source: std::io::Error,
    },
}
