//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::config::EngineConfig;
use crate::format::GraphReader;
use crate::graph::{sorted_neighbors, traverse, Graph, TraversalKind};
use crate::report::{render_report, write_list, ReportGenerator, ReportKind, ReportOutcome};
use crate::types::{GraphError, GraphResult};

fn load(path: &Path, config: &EngineConfig) -> GraphResult<Graph> {
    GraphReader::new(config).read_from_file(path)
}

/// Load the graph, write every report, and print both traversals and the
/// adjacency list.
pub fn cmd_run(
    path: &Path,
    start: Option<&str>,
    config: &EngineConfig,
    json: bool,
) -> GraphResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(path, start, config, json, &mut out)
}

/// `cmd_run` over any writer.
///
/// Static reports are written and listed before the start vertex is
/// checked, so a missing vertex still leaves Sets/Degree/List/Matrix on
/// disk. The missing vertex itself is returned as an error, not printed.
pub fn run_to(
    path: &Path,
    start: Option<&str>,
    config: &EngineConfig,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let generator = ReportGenerator::new(&graph, path, config);

    let mut outcomes = generator.write_static_reports()?;

    let traversals = match start {
        Some(start) if graph.contains_vertex(start) => generator.write_traversal_reports(start)?,
        Some(start) => {
            print_outcomes(&outcomes, json, out)?;
            return Err(GraphError::VertexNotFound(start.to_string()));
        }
        None => {
            print_outcomes(&outcomes, json, out)?;
            return Ok(());
        }
    };
    outcomes.extend(traversals.outcomes);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "start": start,
            "bfs": traversals.bfs.labels,
            "dfs": traversals.dfs.labels,
            "reports": outcomes,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info).unwrap_or_default())?;
    } else {
        print_outcomes(&outcomes, false, out)?;
        writeln!(out, "BFS: {}", traversals.bfs.joined())?;
        writeln!(out, "DFS: {}", traversals.dfs.joined())?;
        write_list(&graph, out)?;
    }
    out.flush()?;
    Ok(())
}

fn print_outcomes(outcomes: &[ReportOutcome], json: bool, out: &mut impl Write) -> GraphResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(outcomes).unwrap_or_default())?;
        return Ok(());
    }
    for outcome in outcomes {
        match outcome {
            ReportOutcome::Written { path, .. } => writeln!(out, "Wrote {}", path.display())?,
            ReportOutcome::Skipped { path, reason, .. } => {
                writeln!(out, "Skipped {} ({})", path.display(), reason)?
            }
        }
    }
    Ok(())
}

/// Display summary counts for a graph file.
pub fn cmd_info(path: &Path, config: &EngineConfig, json: bool) -> GraphResult<()> {
    let graph = load(path, config)?;

    let entries = graph.entry_count();
    let unresolved = graph.unresolved_entry_count();
    let max_degree = graph
        .lists()
        .iter()
        .map(|l| l.degree())
        .max()
        .unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "neighbor_entries": entries,
            "degree_sum": entries,
            "max_degree": max_degree,
            "unresolved_entries": unresolved,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Neighbor entries: {}", entries);
        println!("Max degree: {}", max_degree);
        println!("Unresolved entries: {}", unresolved);
    }
    Ok(())
}

/// Print the load-order index of a vertex.
pub fn cmd_lookup(path: &Path, label: &str, config: &EngineConfig, json: bool) -> GraphResult<()> {
    let graph = load(path, config)?;
    let index = graph
        .vertex_index_of(label)
        .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))?;

    if json {
        println!("{}", serde_json::json!({"label": label, "index": index}));
    } else {
        println!("{} {}", label, index);
    }
    Ok(())
}

/// Print a vertex's neighbors in traversal order.
pub fn cmd_neighbors(
    path: &Path,
    label: &str,
    config: &EngineConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let index = graph
        .vertex_index_of(label)
        .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))?;
    let neighbors: Vec<&str> = sorted_neighbors(&graph, index)
        .into_iter()
        .filter_map(|i| graph.label(i))
        .map(|l| l.as_str())
        .collect();

    if json {
        println!(
            "{}",
            serde_json::json!({"label": label, "index": index, "neighbors": neighbors})
        );
    } else {
        println!("{}: {}", label, neighbors.join(" "));
    }
    Ok(())
}

/// Run one traversal and print it.
pub fn cmd_traverse(
    path: &Path,
    start: &str,
    kind: TraversalKind,
    config: &EngineConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let result = traverse(&graph, start, kind)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "kind": kind.name(),
                "start": start,
                "count": result.count(),
                "order": result.labels,
            }))
            .unwrap_or_default()
        );
    } else {
        println!("{}: {}", kind, result.joined());
        println!("Visited: {}", result.count());
    }
    Ok(())
}

/// Render one report to stdout instead of a file.
pub fn cmd_report(
    path: &Path,
    kind: ReportKind,
    start: Option<&str>,
    config: &EngineConfig,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_report(&graph, kind, start, &mut out)?;
    out.flush()?;
    Ok(())
}
