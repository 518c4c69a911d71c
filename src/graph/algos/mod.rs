//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal with per-visit snapshots
//! - `dfs`: Depth-first traversal with per-visit snapshots
//! - `dijkstra`: Weighted shortest paths with per-finalization snapshots

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
