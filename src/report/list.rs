//! Adjacency-list dump.

use std::io::Write;

use crate::graph::Graph;

/// One line per vertex in load order: `head -> n1 -> ... -> NULL`.
pub fn write_list(graph: &Graph, writer: &mut impl Write) -> std::io::Result<()> {
    for (i, list) in graph.lists().iter().enumerate() {
        if list.is_empty() {
            writeln!(writer, "List[{}]: (empty)", i)?;
            continue;
        }
        let line: Vec<&str> = list.entries().iter().map(|e| e.as_str()).collect();
        writeln!(writer, "{} -> NULL", line.join(" -> "))?;
    }
    Ok(())
}
