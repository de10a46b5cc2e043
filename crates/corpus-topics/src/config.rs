//! Topic model configuration.

use serde::{Deserialize, Serialize};

/// Hyperparameters and budget for one LDA fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdaConfig {
    /// Document-topic Dirichlet concentration as a total mass over topics;
    /// the per-topic parameter is `alpha_sum / K`
    #[serde(default = "default_alpha_sum")]
    pub alpha_sum: f64,

    /// Topic-word Dirichlet concentration per word
    #[serde(default = "default_beta")]
    pub beta: f64,

    /// Fixed number of Gibbs sweeps; the sampler does not test convergence
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Corpus partitions sampled in parallel; falls back to one partition
    /// for small corpora
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Fixed RNG seed for reproducible sampling; seeded from the OS when
    /// unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            alpha_sum: default_alpha_sum(),
            beta: default_beta(),
            iterations: default_iterations(),
            workers: default_workers(),
            seed: None,
        }
    }
}

fn default_alpha_sum() -> f64 {
    0.6
}
fn default_beta() -> f64 {
    0.01
}
fn default_iterations() -> usize {
    500
}
fn default_workers() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LdaConfig::default();
        assert!((config.alpha_sum - 0.6).abs() < f64::EPSILON);
        assert!((config.beta - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.workers, 2);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let json = r#"{"iterations": 50, "seed": 7}"#;
        let config: LdaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.iterations, 50);
        assert_eq!(config.seed, Some(7));
        assert!((config.beta - 0.01).abs() < f64::EPSILON);
    }
}
