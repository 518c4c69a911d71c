use crate::error::{Result, StepgraphError};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{NodeId, TraversalSnapshot, TreeEdge};
use std::collections::BTreeSet;

/// Depth-first traversal engine
///
/// Identical step contract to [`Bfs`](super::bfs::Bfs) with a LIFO
/// frontier: one new node per `next()`, one owned snapshot per visit.
pub struct Dfs<'g> {
    graph: &'g dyn GraphProvider,
    visited: BTreeSet<NodeId>,
    tree_edges: Vec<TreeEdge>,
    stack: Vec<(NodeId, Option<NodeId>)>,
}

impl std::fmt::Debug for Dfs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dfs")
            .field("visited", &self.visited)
            .field("tree_edges", &self.tree_edges)
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

impl<'g> Dfs<'g> {
    /// Start a depth-first traversal from `start`
    #[tracing::instrument(skip(graph))]
    pub fn new(graph: &'g dyn GraphProvider, start: NodeId) -> Result<Self> {
        if !graph.contains_node(start) {
            return Err(StepgraphError::invalid_start_node(start));
        }

        Ok(Dfs {
            graph,
            visited: BTreeSet::new(),
            tree_edges: Vec::new(),
            stack: vec![(start, None)],
        })
    }

    fn snapshot(&self) -> TraversalSnapshot {
        TraversalSnapshot {
            visited: self.visited.clone(),
            tree_edges: self.tree_edges.clone(),
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = TraversalSnapshot;

    fn next(&mut self) -> Option<TraversalSnapshot> {
        while let Some((node, parent)) = self.stack.pop() {
            // A node may be stacked more than once before its first visit
            if self.visited.contains(&node) {
                continue;
            }
            self.visited.insert(node);

            if let Some(parent) = parent {
                self.tree_edges.push(TreeEdge {
                    parent,
                    child: node,
                });
            }
            tracing::trace!(node, "dfs visit");

            // Push descending so pops, and therefore visits, are ascending
            let mut neighbors = self.graph.neighbors(node);
            neighbors.sort_unstable();
            for neighbor in neighbors.into_iter().rev() {
                if !self.visited.contains(&neighbor) {
                    self.stack.push((neighbor, Some(node)));
                }
            }

            return Some(self.snapshot());
        }

        None
    }
}
