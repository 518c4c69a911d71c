use crate::error::{Result, StepgraphError};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{NodeId, TraversalSnapshot, TreeEdge};
use std::collections::{BTreeSet, VecDeque};

/// Breadth-first traversal engine
///
/// Pull-based: each `next()` visits exactly one new node and yields an
/// owned snapshot of the visited set and tree edges at that instant. The
/// sequence is finite and non-restartable; dropping the engine reclaims
/// all traversal state.
pub struct Bfs<'g> {
    graph: &'g dyn GraphProvider,
    visited: BTreeSet<NodeId>,
    tree_edges: Vec<TreeEdge>,
    frontier: VecDeque<(NodeId, Option<NodeId>)>,
}

impl std::fmt::Debug for Bfs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bfs")
            .field("visited", &self.visited)
            .field("tree_edges", &self.tree_edges)
            .field("frontier", &self.frontier)
            .finish_non_exhaustive()
    }
}

impl<'g> Bfs<'g> {
    /// Start a breadth-first traversal from `start`
    #[tracing::instrument(skip(graph))]
    pub fn new(graph: &'g dyn GraphProvider, start: NodeId) -> Result<Self> {
        if !graph.contains_node(start) {
            return Err(StepgraphError::invalid_start_node(start));
        }

        let mut frontier = VecDeque::new();
        frontier.push_back((start, None));

        Ok(Bfs {
            graph,
            visited: BTreeSet::new(),
            tree_edges: Vec::new(),
            frontier,
        })
    }

    fn snapshot(&self) -> TraversalSnapshot {
        TraversalSnapshot {
            visited: self.visited.clone(),
            tree_edges: self.tree_edges.clone(),
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = TraversalSnapshot;

    fn next(&mut self) -> Option<TraversalSnapshot> {
        while let Some((node, parent)) = self.frontier.pop_front() {
            // A node may be queued more than once before its first visit
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
            tracing::trace!(node, "bfs visit");

            // Enqueue ascending so dequeue order is ascending within a layer
            let mut neighbors = self.graph.neighbors(node);
            neighbors.sort_unstable();
            for neighbor in neighbors {
                if !self.visited.contains(&neighbor) {
                    self.frontier.push_back((neighbor, Some(node)));
                }
            }

            return Some(self.snapshot());
        }

        None
    }
}
