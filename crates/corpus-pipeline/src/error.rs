//! Pipeline error types.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline failures.
///
/// Everything per-entity (fetch failures, cache misses, cache write
/// failures) is handled inside the run and never surfaces here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The cache directory could not be created at all
    #[error("failed to create cache directory {path}: {source}")]
    CacheDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
