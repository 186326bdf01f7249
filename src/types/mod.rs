//! All data types for the adjacency graph library.

pub mod error;
pub mod label;

pub use error::{GraphError, GraphResult};
pub use label::Label;

/// Position of a vertex's adjacency list in the graph (load order).
pub type VertexIndex = usize;

/// Token that terminates a vertex's neighbor list in the input format.
pub const SENTINEL: &str = "-1";

/// Canonical maximum label length in bytes.
pub const MAX_LABEL_LEN: usize = 8;

/// Default upper bound on the declared vertex count.
pub const DEFAULT_MAX_VERTICES: usize = 1024;
