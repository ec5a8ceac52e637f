//! CLI command implementations.

use std::path::Path;

use crate::format::{self, read_edge_list};
use crate::graph::{bfs_traverse, degree_histogram, Adjacency, DiGraph, GraphBuilder, UnGraph};
use crate::types::{GraphInfo, GraphResult};

/// Edge weight type used by the command-line tool.
pub type Weight = i64;

/// Text format produced by `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    GraphMl,
    Dimacs,
    Matrix,
    Dot,
    DigraphDot,
}

impl ExportFormat {
    /// Parse a format from its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "graphml" | "xml" => Some(Self::GraphMl),
            "dimacs" => Some(Self::Dimacs),
            "matrix" | "adjmat" => Some(Self::Matrix),
            "dot" => Some(Self::Dot),
            "digraph-dot" | "digraph" => Some(Self::DigraphDot),
            _ => None,
        }
    }
}

/// A graph loaded from an edge-list file.
pub enum LoadedGraph {
    Directed(DiGraph<Weight>),
    Undirected(UnGraph<Weight>),
}

impl LoadedGraph {
    /// Read an edge list and build the requested graph kind.
    pub fn load(path: &Path, undirected: bool) -> GraphResult<Self> {
        let builder = GraphBuilder::from(read_edge_list::<Weight>(path)?);
        if undirected {
            Ok(Self::Undirected(builder.build_undirected()?))
        } else {
            Ok(Self::Directed(builder.build_directed()?))
        }
    }

    /// Read-only view of either kind.
    pub fn view(&self) -> &dyn Adjacency<Weight = Weight> {
        match self {
            Self::Directed(g) => g,
            Self::Undirected(g) => g,
        }
    }

    /// Whether this graph was built as undirected.
    pub fn is_undirected(&self) -> bool {
        matches!(self, Self::Undirected(_))
    }
}

/// Display vertex and edge counts.
pub fn cmd_info(path: &Path, undirected: bool, json: bool) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, undirected)?;
    let view = graph.view();
    let info = GraphInfo {
        vertices: view.num_verts(),
        edges: view.num_edges(),
        undirected: graph.is_undirected(),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Kind: {}", if info.undirected { "undirected" } else { "directed" });
        println!("Vertices: {}", info.vertices);
        println!("Edges: {}", info.edges);
        if let LoadedGraph::Undirected(g) = &graph {
            println!("Undirected edges: {}", g.num_undirected_edges());
        }
    }
    Ok(())
}

/// Print the graph in one of the export formats.
pub fn cmd_export(
    path: &Path,
    to: ExportFormat,
    undirected: bool,
    source: usize,
    sink: usize,
    label: bool,
) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, undirected)?;
    let view = graph.view();

    let text = match to {
        ExportFormat::GraphMl => format::to_graphml(view),
        ExportFormat::Dimacs => format::to_dimacs(view, source, sink)?,
        ExportFormat::Matrix => format::to_adj_matrix(view),
        ExportFormat::Dot => format::to_dot(view, label),
        ExportFormat::DigraphDot => format::to_digraph_dot(view, label),
    };
    print!("{}", text);
    Ok(())
}

/// Run a breadth-first search and print the parent of every vertex.
pub fn cmd_bfs(path: &Path, src: usize, undirected: bool, json: bool) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, undirected)?;
    let tree = bfs_traverse(graph.view(), src)?;

    if json {
        let info = serde_json::json!({
            "root": tree.root,
            "parent": tree.parent,
            "order": tree.order,
            "depth": tree.depth,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        let parents: Vec<String> = tree
            .parent
            .iter()
            .map(|p| p.map_or_else(|| "-".to_string(), |v| v.to_string()))
            .collect();
        println!("Root: {}", tree.root);
        println!("Reached: {} of {}", tree.order.len(), tree.parent.len());
        println!("Parents: {}", parents.join(" "));
    }
    Ok(())
}

/// Degree statistics of the undirected graph described by the file.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphBuilder::from(read_edge_list::<Weight>(path)?).build_undirected()?;
    let stats = graph.degree_stats()?;
    let histogram = degree_histogram(&graph);

    if json {
        let counts: Vec<serde_json::Value> = histogram
            .iter()
            .enumerate()
            .filter(|(_, vertices)| !vertices.is_empty())
            .map(|(degree, vertices)| serde_json::json!({"degree": degree, "count": vertices.len()}))
            .collect();
        let info = serde_json::json!({
            "vertices": graph.num_verts(),
            "edges": graph.num_undirected_edges(),
            "degree": stats,
            "histogram": counts,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", graph.num_verts());
        println!("Edges: {}", graph.num_undirected_edges());
        println!("Min degree: {}", stats.min);
        println!("Max degree: {}", stats.max);
        println!("Avg degree: {:.3}", stats.avg);
        println!("Degree histogram:");
        for (degree, vertices) in histogram.iter().enumerate() {
            if !vertices.is_empty() {
                println!("  {}: {}", degree, vertices.len());
            }
        }
    }
    Ok(())
}
