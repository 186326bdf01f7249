//! Core graph structure — one self-headed adjacency list per vertex.

use serde::Serialize;

use crate::types::{GraphError, GraphResult, Label, VertexIndex};

/// An ordered sequence of labels. The first entry is the vertex's own label,
/// every later entry names a neighbor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    entries: Vec<Label>,
}

impl AdjacencyList {
    /// Create an empty list (no head yet).
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a tail entry.
    pub fn append(&mut self, label: Label) {
        self.entries.push(label);
    }

    /// The head entry: the vertex's own label.
    pub fn head(&self) -> Option<&Label> {
        self.entries.first()
    }

    /// Neighbor entries, in input order, excluding the head.
    pub fn neighbors(&self) -> &[Label] {
        self.entries.get(1..).unwrap_or(&[])
    }

    /// Number of entries after the head. Repeated neighbors count each time.
    pub fn degree(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// All entries including the head.
    pub fn entries(&self) -> &[Label] {
        &self.entries
    }

    /// Number of entries including the head.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the loader has appended the head entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any neighbor entry (not the head) equals `label`.
    pub fn contains_neighbor(&self, label: &str) -> bool {
        self.neighbors().iter().any(|n| n == label)
    }
}

/// In-memory graph: adjacency lists indexed 0..N-1 in load order.
///
/// The graph owns every list and every entry. Dropping it releases the
/// entries of each list, then the list array, then the graph itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    lists: Vec<AdjacencyList>,
}

impl Graph {
    /// Create a graph with `num_vertices` empty adjacency lists.
    pub fn create(num_vertices: usize) -> GraphResult<Self> {
        let mut lists: Vec<AdjacencyList> = Vec::new();
        lists
            .try_reserve_exact(num_vertices)
            .map_err(|_| GraphError::AllocationFailure {
                requested: num_vertices,
            })?;
        lists.resize_with(num_vertices, AdjacencyList::new);
        Ok(Self { lists })
    }

    /// Number of adjacency lists (vertices).
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Total number of neighbor entries across all lists.
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(AdjacencyList::degree).sum()
    }

    /// Index of the vertex whose head entry equals `label`. Linear scan.
    pub fn vertex_index_of(&self, label: &str) -> Option<VertexIndex> {
        self.lists
            .iter()
            .position(|list| list.head().is_some_and(|h| h == label))
    }

    /// True if some list is headed by `label`.
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertex_index_of(label).is_some()
    }

    /// Append a tail entry to the list at `list_index`.
    pub fn append_entry(&mut self, list_index: VertexIndex, label: Label) -> GraphResult<()> {
        let len = self.lists.len();
        let list = self
            .lists
            .get_mut(list_index)
            .ok_or(GraphError::ListIndexOutOfRange {
                index: list_index,
                len,
            })?;
        list.append(label);
        Ok(())
    }

    /// Append `dest` to the list headed by `src`. Directed: `src` is not
    /// added to `dest`'s list.
    pub fn add_edge(&mut self, src: &str, dest: &Label) -> GraphResult<()> {
        let i = self
            .vertex_index_of(src)
            .ok_or_else(|| GraphError::VertexNotFound(src.to_string()))?;
        if !self.contains_vertex(dest.as_str()) {
            return Err(GraphError::VertexNotFound(dest.to_string()));
        }
        self.append_entry(i, dest.clone())
    }

    /// The adjacency list at `index`.
    pub fn list(&self, index: VertexIndex) -> Option<&AdjacencyList> {
        self.lists.get(index)
    }

    /// All adjacency lists in load order.
    pub fn lists(&self) -> &[AdjacencyList] {
        &self.lists
    }

    /// Label of the vertex at `index`.
    pub fn label(&self, index: VertexIndex) -> Option<&Label> {
        self.lists.get(index).and_then(AdjacencyList::head)
    }

    /// Head labels in load order. Lists without a head are skipped.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.lists.iter().filter_map(AdjacencyList::head)
    }

    /// Vertex indices ordered ascending by label.
    pub fn indices_by_label(&self) -> Vec<VertexIndex> {
        let mut order: Vec<VertexIndex> = (0..self.lists.len())
            .filter(|&i| self.lists[i].head().is_some())
            .collect();
        order.sort_unstable_by(|&a, &b| self.lists[a].head().cmp(&self.lists[b].head()));
        order
    }

    /// Number of neighbor entries that do not name any vertex.
    pub fn unresolved_entry_count(&self) -> usize {
        self.lists
            .iter()
            .flat_map(|list| list.neighbors())
            .filter(|n| !self.contains_vertex(n.as_str()))
            .count()
    }
}
