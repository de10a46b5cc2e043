//! # corpus-pipeline
//!
//! End-to-end orchestration: cache-or-fetch per entity, normalize and
//! tokenize, fit the topic model, score every pair, assemble the graph.
//!
//! The pipeline is synchronous from the caller's perspective; per-entity
//! failures are isolated (a failed fetch drops that entity, a failed cache
//! write falls back to the in-memory text) and only the inability to
//! create the cache directory aborts a run.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::Pipeline;
