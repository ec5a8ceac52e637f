//! Degree statistics.

use crate::types::{DegreeStats, GraphError, GraphResult};

use super::Adjacency;

/// Min, max and mean out-degree over all vertices.
///
/// On an undirected graph out-degree equals degree. A graph with no
/// vertices has no meaningful average and is reported as
/// `GraphError::EmptyGraph`.
pub fn degree_stats<G: Adjacency + ?Sized>(graph: &G) -> GraphResult<DegreeStats> {
    let n = graph.num_verts();
    if n == 0 {
        return Err(GraphError::EmptyGraph);
    }

    let mut min = usize::MAX;
    let mut max = 0;
    let mut total = 0usize;
    for v in 0..n {
        let degree = graph.out_degree(v).unwrap_or(0);
        total += degree;
        min = min.min(degree);
        max = max.max(degree);
    }

    Ok(DegreeStats {
        min,
        max,
        avg: total as f64 / n as f64,
    })
}

/// Vertex indices grouped by out-degree: `result[d]` lists every vertex of
/// degree `d` in ascending order.
pub fn degree_histogram<G: Adjacency + ?Sized>(graph: &G) -> Vec<Vec<usize>> {
    let mut buckets: Vec<Vec<usize>> = Vec::new();
    for v in 0..graph.num_verts() {
        let degree = graph.out_degree(v).unwrap_or(0);
        if buckets.len() <= degree {
            buckets.resize_with(degree + 1, Vec::new);
        }
        buckets[degree].push(v);
    }
    buckets
}
