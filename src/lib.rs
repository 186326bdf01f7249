//! Adjacency graph — an in-memory labeled graph loaded from a flat text
//! description.
//!
//! Each vertex owns a self-headed adjacency list. Neighbors are always
//! visited in ascending label order, which makes BFS/DFS output a pure
//! function of the input and the start vertex. Six flat text reports
//! (sets, degrees, list dump, matrix, BFS, DFS) are derived from a loaded
//! graph.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod report;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::EngineConfig;
pub use format::GraphReader;
pub use graph::{
    bfs, dfs, sorted_neighbors, traverse, AdjacencyList, Graph, GraphBuilder, Traversal,
    TraversalKind,
};
pub use report::{report_path, ReportGenerator, ReportKind, ReportOutcome};
pub use types::{
    GraphError, GraphResult, Label, VertexIndex, DEFAULT_MAX_VERTICES, MAX_LABEL_LEN, SENTINEL,
};
