//! Deterministic neighbor ordering.

use crate::types::VertexIndex;

use super::Graph;

/// Neighbor indices of `vertex`, ascending by neighbor label.
///
/// Entries that do not resolve to a vertex are dropped, as is the vertex's
/// own index. Repeated entries are kept. An out-of-range `vertex` yields an
/// empty list.
pub fn sorted_neighbors(graph: &Graph, vertex: VertexIndex) -> Vec<VertexIndex> {
    let Some(list) = graph.list(vertex) else {
        return Vec::new();
    };

    let mut neighbors: Vec<VertexIndex> = list
        .neighbors()
        .iter()
        .filter_map(|label| graph.vertex_index_of(label.as_str()))
        .filter(|&idx| idx != vertex)
        .collect();

    // Labels are unique per vertex, so stability does not matter.
    neighbors.sort_unstable_by(|&a, &b| graph.label(a).cmp(&graph.label(b)));
    neighbors
}
