//! Error types for the adjacency graph library.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur while loading, querying or reporting on a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Storage for the graph or one of its lists could not be obtained.
    #[error("Memory allocation failed for {requested} adjacency lists")]
    AllocationFailure { requested: usize },

    /// The input source could not be opened.
    #[error("File {} not found", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No adjacency list is headed by this label.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// A BFS/DFS report was requested without a start vertex.
    #[error("{report} report requires a start vertex")]
    MissingStartVertex { report: &'static str },

    /// A report file could not be opened for writing.
    #[error("Cannot open {} for writing", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Label exceeds the configured maximum length.
    #[error("Label {label:?} exceeds maximum length: {} > {max}", .label.len())]
    LabelTooLong { label: String, max: usize },

    /// Label is empty.
    #[error("Empty vertex label")]
    EmptyLabel,

    /// Declared vertex count exceeds the configured maximum.
    #[error("Too many vertices: {declared} > {max}")]
    TooManyVertices { declared: usize, max: usize },

    /// Declared vertex count is not a non-negative integer.
    #[error("Invalid vertex count: {0:?}")]
    InvalidVertexCount(String),

    /// Input ended before a required token.
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    /// Two adjacency lists share the same head label.
    #[error("Duplicate vertex label: {0}")]
    DuplicateVertex(String),

    /// Sentinel appeared where a vertex label was expected.
    #[error("Sentinel found where the label of vertex {index} was expected")]
    MisplacedSentinel { index: usize },

    /// Adjacency list index out of range.
    #[error("Adjacency list index {index} out of range (graph has {len} lists)")]
    ListIndexOutOfRange { index: usize, len: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GraphError {
    /// True for errors caused by malformed input text.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::LabelTooLong { .. }
                | Self::EmptyLabel
                | Self::TooManyVertices { .. }
                | Self::InvalidVertexCount(_)
                | Self::UnexpectedEof { .. }
                | Self::DuplicateVertex(_)
                | Self::MisplacedSentinel { .. }
        )
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
