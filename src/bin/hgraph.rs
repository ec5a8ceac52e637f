//! CLI entry point for the `hgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hashgraph::cli::commands::{self, ExportFormat};
use hashgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "hgraph",
    about = "hgraph: inspect and export index-based graphs read from edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging (RUST_LOG overrides the level)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and edge counts
    Info {
        /// Path to the edge-list file
        file: PathBuf,
        /// Build an undirected graph
        #[arg(long)]
        undirected: bool,
    },
    /// Write the graph in a format for external tools
    Export {
        /// Path to the edge-list file
        file: PathBuf,
        /// Target format: graphml, dimacs, matrix, dot, digraph-dot
        #[arg(long, default_value = "dot")]
        to: String,
        /// Build an undirected graph
        #[arg(long)]
        undirected: bool,
        /// DIMACS source vertex (0-based)
        #[arg(long, default_value = "0")]
        source: usize,
        /// DIMACS sink vertex (0-based)
        #[arg(long, default_value = "0")]
        sink: usize,
        /// Show weights as DOT edge labels
        #[arg(long)]
        label: bool,
    },
    /// Breadth-first search from a vertex
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        src: usize,
        /// Build an undirected graph
        #[arg(long)]
        undirected: bool,
    },
    /// Degree statistics of the undirected graph
    Stats {
        /// Path to the edge-list file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Info { file, undirected } => commands::cmd_info(&file, undirected, json),
        Commands::Export {
            file,
            to,
            undirected,
            source,
            sink,
            label,
        } => {
            let fmt = match ExportFormat::from_name(&to) {
                Some(fmt) => fmt,
                None => {
                    eprintln!("Invalid export format: {}", to);
                    process::exit(3);
                }
            };
            commands::cmd_export(&file, fmt, undirected, source, sink, label)
        }
        Commands::Bfs {
            file,
            src,
            undirected,
        } => commands::cmd_bfs(&file, src, undirected, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::VertexOutOfRange { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
