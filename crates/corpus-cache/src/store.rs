//! On-disk cache store.
//!
//! The backing layout is one flat directory of `<entityId>_Tweets.txt`
//! files. Validity is purely age-based: an entry is usable only while
//! `now - mtime < duration`. The in-memory index is rebuilt from the
//! directory listing on open and on [`CorpusCache::rebuild`].

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::CacheConfig;
use crate::error::CacheError;

/// Fixed suffix for cache files; anything else in the directory is ignored.
const FILE_SUFFIX: &str = "_Tweets.txt";

/// Disk-backed store mapping entity id to a cleaned text blob.
pub struct CorpusCache {
    directory: PathBuf,
    duration_hours: u32,
    override_cache: bool,
    /// Entity id -> last-modified time, from the directory listing
    index: HashMap<String, DateTime<Utc>>,
}

impl CorpusCache {
    /// Open a cache over the configured directory.
    ///
    /// A directory that does not exist yet is treated as "nothing cached",
    /// not an error; it is created lazily on the first write.
    pub fn open(config: CacheConfig) -> Self {
        let mut cache = Self {
            directory: config.directory,
            duration_hours: config.duration_hours,
            override_cache: config.override_cache,
            index: HashMap::new(),
        };
        cache.rebuild();
        cache
    }

    /// True iff a matching entry exists, the cache is not globally
    /// overridden, and the entry's age is strictly below the configured
    /// duration.
    pub fn is_cached(&self, entity_id: &str) -> bool {
        self.is_cached_at(entity_id, Utc::now())
    }

    /// Age check against an explicit instant. An entry exactly at the
    /// duration boundary counts as expired.
    pub fn is_cached_at(&self, entity_id: &str, now: DateTime<Utc>) -> bool {
        if self.override_cache {
            return false;
        }
        match self.index.get(entity_id) {
            Some(modified) => {
                now.signed_duration_since(*modified) < Duration::hours(self.duration_hours as i64)
            }
            None => false,
        }
    }

    /// Read the cached blob for an entity.
    ///
    /// Fails with [`CacheError::Miss`] when no valid entry exists, including
    /// when the backing file disappeared since the index was built.
    pub fn get(&self, entity_id: &str) -> Result<String, CacheError> {
        if !self.is_cached(entity_id) {
            return Err(CacheError::Miss(entity_id.to_string()));
        }
        match fs::read_to_string(self.entry_path(entity_id)) {
            Ok(text) => {
                debug!(entity = entity_id, bytes = text.len(), "Cache hit");
                Ok(text)
            }
            Err(_) => Err(CacheError::Miss(entity_id.to_string())),
        }
    }

    /// Persist a blob for an entity, superseding any prior entry.
    ///
    /// The write goes through a temporary file in the same directory and is
    /// renamed into place, so a failure mid-write leaves either the old
    /// entry or none, never truncated content.
    pub fn put(&mut self, entity_id: &str, text: &str) -> Result<(), CacheError> {
        let persist_err = |source| CacheError::Persistence {
            entity: entity_id.to_string(),
            source,
        };

        fs::create_dir_all(&self.directory).map_err(persist_err)?;

        let mut tmp = NamedTempFile::new_in(&self.directory).map_err(persist_err)?;
        tmp.write_all(text.as_bytes()).map_err(persist_err)?;
        tmp.persist(self.entry_path(entity_id))
            .map_err(|e| persist_err(e.error))?;

        self.index.insert(entity_id.to_string(), Utc::now());
        debug!(entity = entity_id, bytes = text.len(), "Cache entry written");
        Ok(())
    }

    /// Reconfigure the expiry threshold. Takes effect on the next lookup;
    /// pair with [`CorpusCache::rebuild`] to also pick up external changes
    /// to the directory.
    pub fn set_duration(&mut self, hours: u32) {
        self.duration_hours = hours;
    }

    /// Ignore or honor cached entries globally.
    pub fn set_override(&mut self, override_cache: bool) {
        self.override_cache = override_cache;
    }

    /// Recompute the index from the backing directory's current listing.
    ///
    /// Only files carrying the expected suffix are indexed; file contents
    /// are never touched.
    pub fn rebuild(&mut self) {
        self.index.clear();
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            // Missing directory means nothing cached
            Err(_) => return,
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(id) = name.strip_suffix(FILE_SUFFIX) else {
                continue;
            };
            if let Ok(modified) = entry.metadata().and_then(|m| m.modified()) {
                self.index
                    .insert(id.to_string(), DateTime::<Utc>::from(modified));
            }
        }
        info!(
            directory = %self.directory.display(),
            entries = self.index.len(),
            "Cache index rebuilt"
        );
    }

    /// Ids with a currently valid entry.
    pub fn cached_ids(&self) -> Vec<String> {
        let now = Utc::now();
        let mut ids: Vec<String> = self
            .index
            .keys()
            .filter(|id| self.is_cached_at(id, now))
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    fn entry_path(&self, entity_id: &str) -> PathBuf {
        self.directory.join(format!("{entity_id}{FILE_SUFFIX}"))
    }

    /// The configured backing directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
