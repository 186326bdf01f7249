//! Flat text reports derived from a loaded graph.

pub mod degree;
pub mod list;
pub mod matrix;
pub mod sets;
pub mod traversal;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::EngineConfig;
use crate::graph::{bfs, dfs, traverse, Graph, Traversal, TraversalKind};
use crate::types::{GraphError, GraphResult};

pub use degree::write_degree;
pub use list::write_list;
pub use matrix::write_matrix;
pub use sets::write_sets;
pub use traversal::write_traversal;

/// The six report files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Sets,
    Degree,
    List,
    Matrix,
    Bfs,
    Dfs,
}

impl ReportKind {
    /// Reports that do not need a start vertex.
    pub const STATIC: [ReportKind; 4] = [Self::Sets, Self::Degree, Self::List, Self::Matrix];

    /// Suffix appended to the input stem.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Sets => "-SET.TXT",
            Self::Degree => "-DEGREE.TXT",
            Self::List => "-LIST.TXT",
            Self::Matrix => "-MATRIX.TXT",
            Self::Bfs => "-BFS.TXT",
            Self::Dfs => "-DFS.TXT",
        }
    }

    /// Return a human-readable name for this report.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sets => "sets",
            Self::Degree => "degree",
            Self::List => "list",
            Self::Matrix => "matrix",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Parse a report kind from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sets" | "set" => Some(Self::Sets),
            "degree" => Some(Self::Degree),
            "list" => Some(Self::List),
            "matrix" => Some(Self::Matrix),
            "bfs" => Some(Self::Bfs),
            "dfs" => Some(Self::Dfs),
            _ => None,
        }
    }

    /// The report file that holds a traversal of this kind.
    pub fn for_traversal(kind: TraversalKind) -> Self {
        match kind {
            TraversalKind::Breadth => Self::Bfs,
            TraversalKind::Depth => Self::Dfs,
        }
    }

    /// The traversal this report dumps, if any.
    pub fn traversal_kind(&self) -> Option<TraversalKind> {
        match self {
            Self::Bfs => Some(TraversalKind::Breadth),
            Self::Dfs => Some(TraversalKind::Depth),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened to one report file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReportOutcome {
    Written {
        kind: ReportKind,
        path: PathBuf,
    },
    Skipped {
        kind: ReportKind,
        path: PathBuf,
        reason: String,
    },
}

impl ReportOutcome {
    /// The report this outcome refers to.
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Written { kind, .. } | Self::Skipped { kind, .. } => *kind,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Output path for a report: the input's file name cut at its first `.`,
/// plus `suffix`, placed in `output_dir` or next to the input.
pub fn report_path(input: &Path, suffix: &str, output_dir: Option<&Path>) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match name.find('.') {
        Some(pos) => &name[..pos],
        None => name.as_str(),
    };
    let file_name = format!("{}{}", stem, suffix);
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Render one report to any writer. BFS/DFS need `start`.
pub fn render_report(
    graph: &Graph,
    kind: ReportKind,
    start: Option<&str>,
    writer: &mut impl Write,
) -> GraphResult<()> {
    match kind {
        ReportKind::Sets => write_sets(graph, writer)?,
        ReportKind::Degree => write_degree(graph, writer)?,
        ReportKind::List => write_list(graph, writer)?,
        ReportKind::Matrix => write_matrix(graph, writer)?,
        ReportKind::Bfs => {
            write_traversal(&run_traversal(graph, TraversalKind::Breadth, start)?, writer)?
        }
        ReportKind::Dfs => {
            write_traversal(&run_traversal(graph, TraversalKind::Depth, start)?, writer)?
        }
    }
    Ok(())
}

fn run_traversal(graph: &Graph, kind: TraversalKind, start: Option<&str>) -> GraphResult<Traversal> {
    let start = start.ok_or(GraphError::MissingStartVertex {
        report: ReportKind::for_traversal(kind).name(),
    })?;
    traverse(graph, start, kind)
}

/// BFS and DFS from one start vertex, with the fate of each report file.
#[derive(Debug, Clone)]
pub struct TraversalReports {
    pub bfs: Traversal,
    pub dfs: Traversal,
    pub outcomes: Vec<ReportOutcome>,
}

/// Writes report files for one loaded graph.
pub struct ReportGenerator<'g> {
    graph: &'g Graph,
    input: PathBuf,
    output_dir: Option<PathBuf>,
    strict: bool,
}

impl<'g> ReportGenerator<'g> {
    /// Create a generator for `graph`, loaded from `input`.
    pub fn new(graph: &'g Graph, input: &Path, config: &EngineConfig) -> Self {
        Self {
            graph,
            input: input.to_path_buf(),
            output_dir: config.output_dir.clone(),
            strict: config.strict_reports,
        }
    }

    /// Where the given report is written.
    pub fn path_for(&self, kind: ReportKind) -> PathBuf {
        report_path(&self.input, kind.suffix(), self.output_dir.as_deref())
    }

    /// Write a single report file.
    ///
    /// For BFS/DFS the start vertex is resolved before the file is created,
    /// so a missing vertex leaves no file behind.
    pub fn write_report(&self, kind: ReportKind, start: Option<&str>) -> GraphResult<PathBuf> {
        match kind.traversal_kind() {
            Some(tk) => {
                let traversal = run_traversal(self.graph, tk, start)?;
                self.write_traversal_report(&traversal)
            }
            None => self.write_file(kind, |w| render_report(self.graph, kind, None, w)),
        }
    }

    /// Write an already computed traversal to its BFS or DFS file.
    pub fn write_traversal_report(&self, traversal: &Traversal) -> GraphResult<PathBuf> {
        let kind = ReportKind::for_traversal(traversal.kind);
        self.write_file(kind, |w| Ok(write_traversal(traversal, w)?))
    }

    fn write_file(
        &self,
        kind: ReportKind,
        render: impl FnOnce(&mut BufWriter<File>) -> GraphResult<()>,
    ) -> GraphResult<PathBuf> {
        let path = self.path_for(kind);
        let file = File::create(&path).map_err(|e| GraphError::OutputUnavailable {
            path: path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        render(&mut writer)?;
        writer.flush()?;

        log::debug!("Wrote {} report to {}", kind, path.display());
        Ok(path)
    }

    /// Write Sets, Degree, List and Matrix. An unwritable file is skipped
    /// unless strict reporting is enabled.
    pub fn write_static_reports(&self) -> GraphResult<Vec<ReportOutcome>> {
        ReportKind::STATIC
            .iter()
            .map(|&kind| self.isolate(kind, self.write_report(kind, None)))
            .collect()
    }

    /// Run BFS and DFS from `start` once and write both files. Fails with
    /// `VertexNotFound` before touching the file system if `start` is not a
    /// vertex.
    pub fn write_traversal_reports(&self, start: &str) -> GraphResult<TraversalReports> {
        let bfs = bfs(self.graph, start)?;
        let dfs = dfs(self.graph, start)?;
        let outcomes = [&bfs, &dfs]
            .iter()
            .map(|t| {
                let kind = ReportKind::for_traversal(t.kind);
                self.isolate(kind, self.write_traversal_report(t))
            })
            .collect::<GraphResult<Vec<_>>>()?;
        Ok(TraversalReports { bfs, dfs, outcomes })
    }

    fn isolate(&self, kind: ReportKind, result: GraphResult<PathBuf>) -> GraphResult<ReportOutcome> {
        match result {
            Ok(path) => Ok(ReportOutcome::Written { kind, path }),
            Err(GraphError::OutputUnavailable { path, source }) if !self.strict => {
                log::warn!("Skipping {} report: cannot write {}: {}", kind, path.display(), source);
                Ok(ReportOutcome::Skipped {
                    kind,
                    path,
                    reason: source.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }
}
