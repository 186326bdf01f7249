//! Fluent API for building Graph instances.

use crate::types::{GraphError, GraphResult, Label, MAX_LABEL_LEN};

use super::Graph;

/// Fluent builder for constructing a Graph from `(head, neighbors)` groups,
/// in the same order the loader would read them.
pub struct GraphBuilder {
    max_label_len: usize,
    groups: Vec<(String, Vec<String>)>,
}

impl GraphBuilder {
    /// Create a new builder with the canonical label bound.
    pub fn new() -> Self {
        Self {
            max_label_len: MAX_LABEL_LEN,
            groups: Vec::new(),
        }
    }

    /// Create a new builder with a specific label bound.
    pub fn with_max_label_len(max_label_len: usize) -> Self {
        Self {
            max_label_len,
            groups: Vec::new(),
        }
    }

    /// Add a vertex and its neighbor entries.
    pub fn vertex(mut self, head: &str, neighbors: &[&str]) -> Self {
        self.groups.push((
            head.to_string(),
            neighbors.iter().map(|n| n.to_string()).collect(),
        ));
        self
    }

    /// Add an undirected edge, listing it from both endpoints. Endpoints must
    /// already have been added with `vertex`; missing ones are appended.
    pub fn edge(mut self, a: &str, b: &str) -> Self {
        for (from, to) in [(a, b), (b, a)] {
            match self.groups.iter_mut().find(|(h, _)| h == from) {
                Some((_, neighbors)) => neighbors.push(to.to_string()),
                None => self.groups.push((from.to_string(), vec![to.to_string()])),
            }
        }
        self
    }

    /// Build the graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::create(self.groups.len())?;
        for (i, (head, neighbors)) in self.groups.into_iter().enumerate() {
            let head = Label::new(head, self.max_label_len)?;
            if graph.contains_vertex(head.as_str()) {
                return Err(GraphError::DuplicateVertex(head.to_string()));
            }
            graph.append_entry(i, head)?;
            for n in neighbors {
                graph.append_entry(i, Label::new(n, self.max_label_len)?)?;
            }
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
