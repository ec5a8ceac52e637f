//! Summary records produced by graph queries.

use serde::Serialize;

/// Minimum, maximum and mean vertex degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DegreeStats {
    /// Smallest degree over all vertices.
    pub min: usize,
    /// Largest degree over all vertices.
    pub max: usize,
    /// Total degree divided by the vertex count.
    pub avg: f64,
}

/// Vertex and edge counts of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphInfo {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of stored directed edge entries.
    pub edges: usize,
    /// Whether the graph was built as undirected.
    pub undirected: bool,
}
