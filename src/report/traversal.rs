//! BFS / DFS order reports.

use std::io::Write;

use crate::graph::Traversal;

/// Visited labels, space-separated, on one line.
pub fn write_traversal(traversal: &Traversal, writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "{}", traversal.joined())
}
