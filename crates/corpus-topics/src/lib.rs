//! # corpus-topics
//!
//! Latent Dirichlet topic model over tokenized corpora plus the pairwise
//! divergence used for entity similarity.
//!
//! The model is fit once per run by collapsed Gibbs sampling for a fixed
//! iteration budget, internally partitioning the corpus across worker
//! threads with per-iteration statistic merging. Topic count follows a
//! step function of document count so small corpora stay identifiable and
//! large ones stay expressive.

pub mod config;
pub mod model;
pub mod similarity;

pub use config::LdaConfig;
pub use model::{topic_count, LdaModel};
pub use similarity::{kl_divergence, pairwise_divergence, SimilarityMatrix};
