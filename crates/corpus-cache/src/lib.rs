//! Disk-backed corpus cache.
//!
//! One file per entity under a configured directory, named
//! `<entityId>_Tweets.txt`. File presence plus modification time is the
//! entire persisted index; entries expire after a configurable number of
//! hours and are re-fetched by the pipeline.

pub mod config;
pub mod error;
pub mod store;

pub use config::CacheConfig;
pub use error::CacheError;
pub use store::CorpusCache;
