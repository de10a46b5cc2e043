//! Graph assembly configuration.

use serde::{Deserialize, Serialize};

use crate::assembler::NodeColor;

/// Thresholds and node styling for graph assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Minimum edge weight to display; edges must strictly exceed this
    #[serde(default = "default_weight_threshold")]
    pub weight_threshold: f64,

    /// Divergence floor guarding the inverse-weight transform; pairs at or
    /// below this produce no edge rather than an unbounded weight
    #[serde(default = "default_min_divergence")]
    pub min_divergence: f64,

    /// Color applied to every node
    #[serde(default)]
    pub node_color: NodeColor,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            weight_threshold: default_weight_threshold(),
            min_divergence: default_min_divergence(),
            node_color: NodeColor::default(),
        }
    }
}

fn default_weight_threshold() -> f64 {
    0.3
}
fn default_min_divergence() -> f64 {
    1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert!((config.weight_threshold - 0.3).abs() < f64::EPSILON);
        assert!((config.min_divergence - 1e-9).abs() < f64::EPSILON);
        assert!((config.node_color.b - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_serialization() {
        let json = r#"{"weight_threshold": 0.5}"#;
        let config: GraphConfig = serde_json::from_str(json).unwrap();
        assert!((config.weight_threshold - 0.5).abs() < f64::EPSILON);
        assert!((config.min_divergence - 1e-9).abs() < f64::EPSILON);
    }
}
