//! Pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use corpus_cache::CacheConfig;
use corpus_graph::GraphConfig;
use corpus_topics::LdaConfig;

/// Master configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Corpus cache settings
    pub cache: CacheConfig,

    /// Topic model settings
    #[serde(default)]
    pub lda: LdaConfig,

    /// Graph assembly settings
    #[serde(default)]
    pub graph: GraphConfig,
}

impl PipelineConfig {
    /// Defaults everywhere except the cache directory, which has no
    /// sensible default.
    pub fn new(cache_directory: impl Into<PathBuf>) -> Self {
        Self {
            cache: CacheConfig::new(cache_directory),
            lda: LdaConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_component_defaults() {
        let config = PipelineConfig::new("./tweets");
        assert_eq!(config.cache.duration_hours, 240);
        assert!((config.lda.alpha_sum - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.lda.iterations, 500);
        assert!((config.graph.weight_threshold - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_serialization() {
        let json = r#"{"cache": {"directory": "./tweets"}, "lda": {"iterations": 50}}"#;
        let config: PipelineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.cache.directory, PathBuf::from("./tweets"));
        assert_eq!(config.lda.iterations, 50);
        assert!((config.graph.min_divergence - 1e-9).abs() < f64::EPSILON);
    }
}
