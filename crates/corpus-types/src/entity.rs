//! Tracked entity types.

use serde::{Deserialize, Serialize};

/// A tracked entity: one identifier plus the text corpus gathered for it.
///
/// Entities are created at pipeline start from a static list of identifiers,
/// populated once by the cache or the fetch collaborator, and treated as
/// immutable for the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier (e.g. a screen name)
    id: String,

    /// Raw text as supplied by the fetch collaborator
    raw_text: Option<String>,

    /// Cleaned text derived from the raw text (or loaded from cache)
    cleaned_text: Option<String>,
}

impl Entity {
    /// Create a new entity with no corpus attached yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: None,
            cleaned_text: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    /// Cleaned corpus text, if the entity has been populated.
    pub fn cleaned_text(&self) -> Option<&str> {
        self.cleaned_text.as_deref()
    }

    /// Attach the raw corpus text. Only the first call has any effect;
    /// entities are populated once per run.
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        if self.raw_text.is_none() {
            self.raw_text = Some(text.into());
        }
    }

    /// Attach the cleaned corpus text. Only the first call has any effect.
    pub fn set_cleaned_text(&mut self, text: impl Into<String>) {
        if self.cleaned_text.is_none() {
            self.cleaned_text = Some(text.into());
        }
    }
}
