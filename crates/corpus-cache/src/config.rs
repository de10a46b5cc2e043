//! Cache configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the on-disk corpus cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding one `<entityId>_Tweets.txt` file per entity
    pub directory: PathBuf,

    /// Validity window in hours; entries at or past this age are expired
    #[serde(default = "default_duration_hours")]
    pub duration_hours: u32,

    /// Ignore all cached entries for this run, forcing re-fetch
    #[serde(default)]
    pub override_cache: bool,
}

impl CacheConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            duration_hours: default_duration_hours(),
            override_cache: false,
        }
    }
}

fn default_duration_hours() -> u32 {
    240
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CacheConfig::new("/tmp/tweets");
        assert_eq!(config.duration_hours, 240);
        assert!(!config.override_cache);
    }

    #[test]
    fn test_config_serialization() {
        let json = r#"{"directory": "./tweets"}"#;
        let config: CacheConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.directory, PathBuf::from("./tweets"));
        assert_eq!(config.duration_hours, 240);
        assert!(!config.override_cache);
    }
}
