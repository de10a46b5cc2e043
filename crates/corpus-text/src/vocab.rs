//! Shared token vocabulary.
//!
//! Bidirectional mapping between normalized token strings and dense
//! integer feature ids. Built once per run while encoding documents, then
//! treated as read-only by the model and reporting code.

use std::collections::HashMap;

/// Token <-> feature id map shared by all documents in a run.
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    tokens: Vec<String>,
    ids: HashMap<String, u32>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a token's id, allocating the next dense id on first sight.
    pub fn intern(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        let id = self.tokens.len() as u32;
        self.tokens.push(token.to_string());
        self.ids.insert(token.to_string(), id);
        id
    }

    /// Encode a token sequence into a feature sequence, growing the
    /// vocabulary as needed.
    pub fn encode(&mut self, tokens: &[String]) -> Vec<u32> {
        tokens.iter().map(|t| self.intern(t)).collect()
    }

    /// The id for a token, if it has been seen.
    pub fn id(&self, token: &str) -> Option<u32> {
        self.ids.get(token).copied()
    }

    /// The token for an id, if allocated.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
