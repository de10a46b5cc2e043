//! Graph assembly from entities and pairwise divergence scores.
//!
//! Converts the similarity matrix into node and edge records for an
//! external layout/export component. Edge weight is the inverse of the
//! divergence, so closer topic distributions draw heavier edges; only
//! edges strictly above the display threshold survive.

pub mod assembler;
pub mod config;

pub use assembler::{build_graph, Graph, GraphEdge, GraphNode, NodeColor};
pub use config::GraphConfig;
