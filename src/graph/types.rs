use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Node identifier as supplied by the external graph
pub type NodeId = u64;

/// Accumulated path cost for shortest-path traversal
///
/// Wraps an `f64` and rounds to a fixed number of decimal places at every
/// construction point, so repeated relaxations cannot accumulate
/// floating-point drift across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITE: Cost = Cost(f64::INFINITY);

    /// Rounding scale: 6 decimal places
    const SCALE: f64 = 1e6;

    pub fn new(cost: f64) -> Self {
        if cost.is_finite() {
            Cost((cost * Self::SCALE).round() / Self::SCALE)
        } else {
            Cost(cost)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl std::ops::Add<f64> for Cost {
    type Output = Self;

    fn add(self, weight: f64) -> Self {
        Cost::new(self.0 + weight)
    }
}

/// Tree edge in the traversal output, parent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub parent: NodeId,
    pub child: NodeId,
}

/// Weighted edge in the shortest-path output, canonical endpoint order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Per-node cost table entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEntry {
    pub cost: Cost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
}

impl CostEntry {
    /// Entry for a node no path has reached yet
    pub fn unreached() -> Self {
        CostEntry {
            cost: Cost::INFINITE,
            parent: None,
        }
    }
}

/// State captured after one BFS/DFS visit
///
/// An owned copy, independent of the engine that produced it: mutating a
/// snapshot never affects the traversal or snapshots already yielded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalSnapshot {
    pub visited: BTreeSet<NodeId>,
    pub tree_edges: Vec<TreeEdge>,
}

/// State captured after one Dijkstra finalization
///
/// `explored` and `unexplored` are sorted ascending so snapshot sequences
/// compare reproducibly. Owned copy, same independence guarantee as
/// [`TraversalSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathSnapshot {
    pub explored: Vec<NodeId>,
    pub unexplored: Vec<NodeId>,
    pub edges: Vec<WeightedEdge>,
    pub costs: BTreeMap<NodeId, CostEntry>,
}
