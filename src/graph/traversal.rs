use crate::error::{Result, StepgraphError};
use crate::graph::types::{NodeId, WeightedEdge};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Edge weight assumed when a pair has no recorded weight
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Trait for providing graph adjacency and edge weights
///
/// The graph itself is an external collaborator; the engines only need
/// node enumeration, neighbor enumeration, and pair-keyed weight lookup.
pub trait GraphProvider {
    fn nodes(&self) -> Vec<NodeId>;
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;
    fn edges(&self) -> Vec<WeightedEdge>;

    /// Weight of the edge between `a` and `b`, in either order.
    /// `None` when the edge exists without a recorded weight.
    fn weight(&self, a: NodeId, b: NodeId) -> Option<f64>;

    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes().contains(&node)
    }
}

/// Undirected adjacency-set graph with optional per-edge weights
///
/// The reference `GraphProvider` implementation, used by the test suites
/// and available to consumers that have no graph library of their own.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    weights: HashMap<(NodeId, NodeId), f64>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no edges; no-op if already present
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an undirected, unweighted edge, creating endpoints as needed
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Add an undirected weighted edge
    ///
    /// Weights must be finite and non-negative; shortest-path traversal
    /// is undefined for negative weights.
    pub fn add_weighted_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(StepgraphError::invalid_value("edge weight", weight));
        }

        self.add_edge(a, b);
        self.weights.insert(Self::pair_key(a, b), weight);
        Ok(())
    }

    /// Build a graph from a weighted edge list
    pub fn from_weighted_edges(edges: &[(NodeId, NodeId, f64)]) -> Result<Self> {
        let mut graph = Self::new();
        for &(a, b, weight) in edges {
            graph.add_weighted_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Canonical key for an unordered node pair
    fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl GraphProvider for AdjacencyGraph {
    fn nodes(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.adjacency
            .get(&node)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    fn edges(&self) -> Vec<WeightedEdge> {
        self.adjacency
            .iter()
            .flat_map(|(&from, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |&&to| from < to)
                    .map(move |&to| WeightedEdge {
                        from,
                        to,
                        weight: self
                            .weights
                            .get(&Self::pair_key(from, to))
                            .copied()
                            .unwrap_or(DEFAULT_WEIGHT),
                    })
            })
            .collect()
    }

    fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.weights.get(&Self::pair_key(a, b)).copied()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }
}
