//! # corpus-types
//!
//! Shared domain types for the corpus-graph pipeline.
//!
//! This crate defines the types that cross crate boundaries:
//! - Entities: tracked identities with their text corpora
//! - The `CorpusFetcher` collaborator contract and its error type

pub mod entity;
pub mod fetch;

pub use entity::Entity;
pub use fetch::{CorpusFetcher, FetchError};
