//! Graph traversal algorithms (BFS, DFS).

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::types::{GraphError, GraphResult, Label, VertexIndex};

use super::ordering::sorted_neighbors;
use super::Graph;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Queue-based level-order walk.
    Breadth,
    /// Stack-based pre-order walk.
    Depth,
}

impl TraversalKind {
    /// Short name, as printed on the console.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Breadth => "BFS",
            Self::Depth => "DFS",
        }
    }

    /// Parse "bfs"/"dfs" (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" => Some(Self::Breadth),
            "dfs" | "depth" => Some(Self::Depth),
            _ => None,
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a traversal: visited vertices in visitation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    pub kind: TraversalKind,
    pub order: Vec<VertexIndex>,
    pub labels: Vec<Label>,
}

impl Traversal {
    fn from_order(graph: &Graph, kind: TraversalKind, order: Vec<VertexIndex>) -> Self {
        let labels = order
            .iter()
            .filter_map(|&i| graph.label(i).cloned())
            .collect();
        Self {
            kind,
            order,
            labels,
        }
    }

    /// Number of vertices visited.
    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Labels joined by single spaces.
    pub fn joined(&self) -> String {
        self.labels
            .iter()
            .map(Label::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn resolve_start(graph: &Graph, start: &str) -> GraphResult<VertexIndex> {
    graph
        .vertex_index_of(start)
        .ok_or_else(|| GraphError::VertexNotFound(start.to_string()))
}

/// Run the traversal of the given kind from `start`.
pub fn traverse(graph: &Graph, start: &str, kind: TraversalKind) -> GraphResult<Traversal> {
    match kind {
        TraversalKind::Breadth => bfs(graph, start),
        TraversalKind::Depth => dfs(graph, start),
    }
}

/// BFS from `start`, visiting neighbors in ascending label order.
/// Vertices are marked when enqueued.
pub fn bfs(graph: &Graph, start: &str) -> GraphResult<Traversal> {
    let start_idx = resolve_start(graph, start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order: Vec<VertexIndex> = Vec::new();
    let mut queue: VecDeque<VertexIndex> = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start_idx);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for neighbor in sorted_neighbors(graph, current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!("BFS from {} visited {} vertices", start, order.len());
    Ok(Traversal::from_order(graph, TraversalKind::Breadth, order))
}

/// One DFS stack frame: a vertex and a cursor into its sorted neighbors.
struct Frame {
    neighbors: Vec<VertexIndex>,
    cursor: usize,
}

/// DFS from `start`, pre-order, neighbors in ascending label order.
/// Uses an explicit stack so depth is not bounded by the call stack.
pub fn dfs(graph: &Graph, start: &str) -> GraphResult<Traversal> {
    let start_idx = resolve_start(graph, start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order: Vec<VertexIndex> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    visited[start_idx] = true;
    order.push(start_idx);
    stack.push(Frame {
        neighbors: sorted_neighbors(graph, start_idx),
        cursor: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let Some(&next) = frame.neighbors.get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;
        if visited[next] {
            continue;
        }
        visited[next] = true;
        order.push(next);
        stack.push(Frame {
            neighbors: sorted_neighbors(graph, next),
            cursor: 0,
        });
    }

    log::debug!("DFS from {} visited {} vertices", start, order.len());
    Ok(Traversal::from_order(graph, TraversalKind::Depth, order))
}
