//! Stepgraph Library
//!
//! Graph traversal engines (BFS, DFS, Dijkstra) whose every state change
//! is observable: each engine is a pull-based iterator that advances one
//! discrete step per call and yields an owned snapshot of its state,
//! suitable for step-by-step visualization or algorithm study.

pub mod error;
pub mod graph;
pub mod heap;
pub mod logging;

pub use error::{Result, StepgraphError};
pub use graph::{
    AdjacencyGraph, Bfs, Cost, CostEntry, Dfs, Dijkstra, GraphProvider, NodeId,
    ShortestPathSnapshot, TraversalSnapshot, TreeEdge, WeightedEdge,
};
pub use heap::{Heap, HeapEntry, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder};
