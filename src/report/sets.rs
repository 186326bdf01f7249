//! `V(G)` / `E(G)` set report.

use std::io::Write;

use crate::graph::{sorted_neighbors, Graph};

/// Write the vertex set and the undirected edge set.
///
/// Vertices are listed ascending by label. Each edge appears once as `(a,b)`,
/// discovered from the lower-sorted vertex first; an N×N emitted matrix
/// suppresses the mirrored `(b,a)`.
pub fn write_sets(graph: &Graph, writer: &mut impl Write) -> std::io::Result<()> {
    let order = graph.indices_by_label();
    let n = graph.vertex_count();

    let vertices: Vec<&str> = order
        .iter()
        .filter_map(|&i| graph.label(i))
        .map(|l| l.as_str())
        .collect();
    writeln!(writer, "V(G)={{{}}}", vertices.join(","))?;

    let mut emitted = vec![false; n * n];
    let mut edges: Vec<String> = Vec::new();
    for &i in &order {
        for j in sorted_neighbors(graph, i) {
            if emitted[i * n + j] {
                continue;
            }
            emitted[i * n + j] = true;
            emitted[j * n + i] = true;
            if let (Some(a), Some(b)) = (graph.label(i), graph.label(j)) {
                edges.push(format!("({},{})", a, b));
            }
        }
    }
    writeln!(writer, "E(G)={{{}}}", edges.join(","))?;
    Ok(())
}
