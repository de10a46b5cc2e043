//! Node and edge assembly.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use corpus_topics::SimilarityMatrix;

use crate::config::GraphConfig;

/// RGB node color in [0, 1] channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for NodeColor {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.9,
        }
    }
}

/// One rendered node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub size: f32,
    pub color: NodeColor,
}

/// One undirected weighted edge. Source and target are ordered by entity
/// index, so each unordered pair appears at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Assembled graph, ready for an external layout/export component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Scaled-log node size with a floor.
///
/// Saturating in the population count, so graphs of very different sizes
/// stay visually comparable; never below a floor of 1.
fn node_size(population: usize) -> f32 {
    const SIZE_CORRECTION_FACTOR: f32 = 0.5;
    let size = SIZE_CORRECTION_FACTOR * (1.0 + population as f32).log10();
    size.max(1.0)
}

/// Build the node/edge set for the given entities and divergence scores.
///
/// Every entity becomes exactly one node. For each unordered pair (i, j)
/// the edge weight is `1 / divergence`; pairs whose divergence does not
/// exceed the configured floor yield no edge (the inverse would be
/// unbounded), and surviving edges must strictly exceed the display
/// threshold. Output depends only on the score matrix, not on iteration
/// order.
///
/// # Panics
/// Panics if the matrix does not cover the entity list.
pub fn build_graph(entity_ids: &[String], scores: &SimilarityMatrix, config: &GraphConfig) -> Graph {
    assert_eq!(
        entity_ids.len(),
        scores.len(),
        "score matrix must cover all entities"
    );

    let population = entity_ids.len();
    let nodes = entity_ids
        .iter()
        .map(|id| GraphNode {
            id: id.clone(),
            size: node_size(population),
            color: config.node_color,
        })
        .collect();

    let mut edges = Vec::new();
    for i in 0..population {
        for j in (i + 1)..population {
            let divergence = scores.divergence(i, j);
            if !divergence.is_finite() || divergence <= config.min_divergence {
                debug!(
                    source = %entity_ids[i],
                    target = %entity_ids[j],
                    divergence,
                    "Skipping pair below divergence floor"
                );
                continue;
            }
            let weight = 1.0 / divergence;
            if weight > config.weight_threshold {
                edges.push(GraphEdge {
                    source: entity_ids[i].clone(),
                    target: entity_ids[j].clone(),
                    weight,
                });
            }
        }
    }

    info!(
        nodes = population,
        edges = edges.len(),
        threshold = config.weight_threshold,
        "Graph assembled"
    );
    Graph { nodes, edges }
}
