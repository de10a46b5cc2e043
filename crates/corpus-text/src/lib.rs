//! Text normalization for topic inference.
//!
//! Deterministic transformation from raw corpus text to a cleaned string
//! and on to a token sequence, plus the shared token vocabulary. The
//! cleaning and tokenization rules fix the model's vocabulary, so their
//! semantics are load-bearing: change them and every downstream similarity
//! changes.

pub mod normalize;
pub mod vocab;

pub use normalize::Normalizer;
pub use vocab::Vocabulary;
