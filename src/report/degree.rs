//! Degree table report.

use std::io::Write;

use crate::graph::Graph;

/// One `label degree` line per vertex, ascending by label. Degree is the raw
/// neighbor-entry count, so repeated entries inflate it.
pub fn write_degree(graph: &Graph, writer: &mut impl Write) -> std::io::Result<()> {
    for i in graph.indices_by_label() {
        if let (Some(label), Some(list)) = (graph.label(i), graph.list(i)) {
            writeln!(writer, "{} {}", label, list.degree())?;
        }
    }
    Ok(())
}
