//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod ordering;
pub mod traversal;

pub use adjacency_graph::{AdjacencyList, Graph};
pub use builder::GraphBuilder;
pub use ordering::sorted_neighbors;
pub use traversal::{bfs, dfs, traverse, Traversal, TraversalKind};
