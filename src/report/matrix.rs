//! Adjacency matrix report.

use std::io::Write;

use crate::graph::Graph;

/// Extra padding added to the longest label to get the cell width.
const CELL_PADDING: usize = 2;

/// Header row of labels, then a `1`/`0` row per vertex, both in load order.
/// A cell is `1` when the row vertex's list contains the column label.
pub fn write_matrix(graph: &Graph, writer: &mut impl Write) -> std::io::Result<()> {
    let width = cell_width(graph);

    write!(writer, "{:<width$}", "", width = width)?;
    for label in graph.labels() {
        write!(writer, "{:<width$}", label.as_str(), width = width)?;
    }
    writeln!(writer)?;

    for row in graph.lists() {
        let Some(row_label) = row.head() else { continue };
        write!(writer, "{:<width$}", row_label.as_str(), width = width)?;
        for col_label in graph.labels() {
            let cell = if row.contains_neighbor(col_label.as_str()) {
                "1"
            } else {
                "0"
            };
            write!(writer, "{:<width$}", cell, width = width)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Longest label length plus padding.
pub fn cell_width(graph: &Graph) -> usize {
    graph.labels().map(|l| l.len()).max().unwrap_or(0) + CELL_PADDING
}
