use crate::error::{Result, StepgraphError};
use crate::graph::traversal::{GraphProvider, DEFAULT_WEIGHT};
use crate::graph::types::{Cost, CostEntry, NodeId, ShortestPathSnapshot, WeightedEdge};
use crate::heap::MinHeap;
use std::collections::{BTreeMap, BTreeSet};

/// Dijkstra shortest-path engine
///
/// Lazy-deletion variant: every node is seeded into the min-heap keyed by
/// its current cost, relaxation pushes a fresh entry instead of rewriting
/// the old one, and entries popped for already-explored nodes are
/// discarded silently. Each `next()` finalizes exactly one node, relaxes
/// its neighbors, and yields an owned snapshot of the full state.
///
/// Greedy finality holds for non-negative weights: once a node appears in
/// `explored`, its cost and parent never change in later snapshots.
pub struct Dijkstra<'g> {
    graph: &'g dyn GraphProvider,
    heap: MinHeap<NodeId>,
    explored: BTreeSet<NodeId>,
    costs: BTreeMap<NodeId, CostEntry>,
    edges: Vec<WeightedEdge>,
}

impl std::fmt::Debug for Dijkstra<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dijkstra")
            .field("heap", &self.heap)
            .field("explored", &self.explored)
            .field("costs", &self.costs)
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}

impl<'g> Dijkstra<'g> {
    /// Start a shortest-path traversal from `start`
    #[tracing::instrument(skip(graph))]
    pub fn new(graph: &'g dyn GraphProvider, start: NodeId) -> Result<Self> {
        if !graph.contains_node(start) {
            return Err(StepgraphError::invalid_start_node(start));
        }

        let mut heap = MinHeap::new();
        let mut costs = BTreeMap::new();
        for node in graph.nodes() {
            let entry = if node == start {
                CostEntry {
                    cost: Cost::ZERO,
                    parent: None,
                }
            } else {
                CostEntry::unreached()
            };
            costs.insert(node, entry);
            heap.insert(node, entry.cost.value());
        }

        let mut edges = graph.edges();
        edges.sort_by(|a, b| (a.from, a.to).cmp(&(b.from, b.to)));

        Ok(Dijkstra {
            graph,
            heap,
            explored: BTreeSet::new(),
            costs,
            edges,
        })
    }

    /// Relax every unexplored neighbor of a freshly finalized node
    fn relax_neighbors(&mut self, node: NodeId) {
        let base = self.costs[&node].cost;

        let mut neighbors = self.graph.neighbors(node);
        neighbors.sort_unstable();
        for neighbor in neighbors {
            if self.explored.contains(&neighbor) {
                continue;
            }

            let weight = self.graph.weight(node, neighbor).unwrap_or(DEFAULT_WEIGHT);
            let candidate = base + weight;

            let Some(entry) = self.costs.get_mut(&neighbor) else {
                continue;
            };
            if candidate < entry.cost {
                entry.cost = candidate;
                entry.parent = Some(node);
                tracing::trace!(node = neighbor, cost = candidate.value(), via = node, "relaxed");

                // Lazy decrease-key: the superseded entry stays queued
                // and is discarded as stale when it pops
                self.heap.insert(neighbor, candidate.value());
            }
        }
    }

    fn snapshot(&self) -> ShortestPathSnapshot {
        ShortestPathSnapshot {
            explored: self.explored.iter().copied().collect(),
            unexplored: self
                .costs
                .keys()
                .copied()
                .filter(|node| !self.explored.contains(node))
                .collect(),
            edges: self.edges.clone(),
            costs: self.costs.clone(),
        }
    }
}

impl Iterator for Dijkstra<'_> {
    type Item = ShortestPathSnapshot;

    fn next(&mut self) -> Option<ShortestPathSnapshot> {
        while let Some(entry) = self.heap.pop() {
            let node = entry.item;
            if self.explored.contains(&node) {
                tracing::trace!(node, "stale entry discarded");
                continue;
            }

            // An infinite pop means everything still queued is
            // unreachable; those nodes stay unexplored forever
            if !self.costs[&node].cost.is_finite() {
                return None;
            }

            self.explored.insert(node);
            tracing::debug!(node, cost = self.costs[&node].cost.value(), "finalized");
            self.relax_neighbors(node);

            return Some(self.snapshot());
        }

        None
    }
}
