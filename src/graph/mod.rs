//! Graph traversal with observable state
//!
//! Provides snapshot-producing traversal engines:
//! - BFS and DFS engines yielding one snapshot per node visit
//! - Dijkstra engine yielding one snapshot per node finalization
//! - Graph provider trait for pluggable graph sources

pub mod algos;
pub mod traversal;
pub mod types;

pub use algos::{Bfs, Dfs, Dijkstra};
pub use traversal::{AdjacencyGraph, GraphProvider, DEFAULT_WEIGHT};
pub use types::{
    Cost, CostEntry, NodeId, ShortestPathSnapshot, TraversalSnapshot, TreeEdge, WeightedEdge,
};
