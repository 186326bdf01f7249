//! Reads the flat text graph description into an in-memory graph.
//!
//! ```text
//! <N>
//! <label_1> <neighbor>... -1
//! ...
//! <label_N> <neighbor>... -1
//! ```

use std::io::Read;
use std::path::Path;

use crate::config::EngineConfig;
use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, Label, SENTINEL};

/// Reader for graph description files.
pub struct GraphReader {
    max_vertices: usize,
    max_label_len: usize,
}

impl GraphReader {
    /// Create a reader with the limits from `config`.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_vertices: config.max_vertices,
            max_label_len: config.max_label_len,
        }
    }

    /// Read a graph description file.
    pub fn read_from_file(&self, path: &Path) -> GraphResult<Graph> {
        let mut file = std::fs::File::open(path).map_err(|e| GraphError::SourceNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loading graph from {}", path.display());
        self.read_from(&mut file)
    }

    /// Read from any reader.
    pub fn read_from(&self, reader: &mut impl Read) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.read_str(&text)
    }

    /// Parse a graph description held in memory.
    pub fn read_str(&self, text: &str) -> GraphResult<Graph> {
        let mut tokens = text.split_whitespace();

        // Step 1: declared vertex count
        let count_token = tokens.next().ok_or_else(|| GraphError::UnexpectedEof {
            expected: "vertex count".to_string(),
        })?;
        let declared: usize = count_token
            .parse()
            .map_err(|_| GraphError::InvalidVertexCount(count_token.to_string()))?;
        if declared > self.max_vertices {
            return Err(GraphError::TooManyVertices {
                declared,
                max: self.max_vertices,
            });
        }

        let mut graph = Graph::create(declared)?;

        // Step 2: one self-headed group per vertex, closed by the sentinel
        for index in 0..declared {
            let head = tokens.next().ok_or_else(|| GraphError::UnexpectedEof {
                expected: format!("label of vertex {}", index),
            })?;
            if head == SENTINEL {
                return Err(GraphError::MisplacedSentinel { index });
            }
            if graph.contains_vertex(head) {
                return Err(GraphError::DuplicateVertex(head.to_string()));
            }
            graph.append_entry(index, Label::new(head, self.max_label_len)?)?;

            loop {
                let token = tokens.next().ok_or_else(|| GraphError::UnexpectedEof {
                    expected: format!("'{}' closing the list of {}", SENTINEL, head),
                })?;
                if token == SENTINEL {
                    break;
                }
                graph.append_entry(index, Label::new(token, self.max_label_len)?)?;
            }
        }

        let trailing = tokens.count();
        if trailing > 0 {
            log::debug!("Ignoring {} tokens after the last vertex", trailing);
        }

        warn_unresolved(&graph);
        log::debug!(
            "Loaded {} vertices with {} neighbor entries",
            graph.vertex_count(),
            graph.entry_count()
        );
        Ok(graph)
    }
}

impl Default for GraphReader {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

/// Neighbor entries naming no vertex are kept but never traversed.
fn warn_unresolved(graph: &Graph) {
    for list in graph.lists() {
        let Some(head) = list.head() else { continue };
        for neighbor in list.neighbors() {
            if !graph.contains_vertex(neighbor.as_str()) {
                log::warn!("Vertex {} lists unknown neighbor {}", head, neighbor);
            }
        }
    }
}
