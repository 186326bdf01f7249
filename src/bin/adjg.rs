//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjacency_graph::cli::commands;
use adjacency_graph::config::EngineConfig;
use adjacency_graph::graph::TraversalKind;
use adjacency_graph::report::ReportKind;
use adjacency_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "Adjacency graph CLI — load a graph description, traverse it, write reports"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a graph, write all reports, print BFS/DFS and the adjacency list
    Run {
        /// Path to the graph description file
        file: PathBuf,
        /// Start vertex for the BFS/DFS reports
        #[arg(long)]
        start: Option<String>,
    },
    /// Display summary counts for a graph file
    Info {
        /// Path to the graph description file
        file: PathBuf,
    },
    /// Print the load-order index of a vertex
    Lookup {
        /// Path to the graph description file
        file: PathBuf,
        /// Vertex label
        label: String,
    },
    /// Print a vertex's neighbors in ascending label order
    Neighbors {
        /// Path to the graph description file
        file: PathBuf,
        /// Vertex label
        label: String,
    },
    /// Run a BFS or DFS traversal from a start vertex
    Traverse {
        /// Path to the graph description file
        file: PathBuf,
        /// Start vertex label
        start: String,
        /// Traversal order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
    },
    /// Print one report to stdout
    Report {
        /// Path to the graph description file
        file: PathBuf,
        /// Report: sets, degree, list, matrix, bfs, dfs
        kind: String,
        /// Start vertex (bfs and dfs only)
        #[arg(long)]
        start: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(3);
            }
        },
        None => EngineConfig::default(),
    };

    let result = match cli.command {
        Commands::Run { file, start } => {
            commands::cmd_run(&file, start.as_deref(), &config, json)
        }
        Commands::Info { file } => commands::cmd_info(&file, &config, json),
        Commands::Lookup { file, label } => commands::cmd_lookup(&file, &label, &config, json),
        Commands::Neighbors { file, label } => {
            commands::cmd_neighbors(&file, &label, &config, json)
        }
        Commands::Traverse { file, start, order } => {
            let kind = match TraversalKind::from_name(&order) {
                Some(k) => k,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, &start, kind, &config, json)
        }
        Commands::Report { file, kind, start } => {
            let rk = match ReportKind::from_name(&kind) {
                Some(rk) => rk,
                None => {
                    eprintln!("Invalid report kind: {}", kind);
                    process::exit(3);
                }
            };
            commands::cmd_report(&file, rk, start.as_deref(), &config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::SourceNotFound { .. } | GraphError::Io(_) => 1,
            e if e.is_malformed_input() => 2,
            GraphError::Config(_) | GraphError::MissingStartVertex { .. } => 3,
            GraphError::VertexNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
