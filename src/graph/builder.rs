//! Fluent API for building graphs from a list of edges.

use crate::format::EdgeList;
use crate::types::{GraphError, GraphResult, MAX_BUILD_VERTICES};

use super::{DiGraph, UnGraph};

/// Collects edges, then builds a directed or undirected graph.
///
/// The vertex count is the larger of the declared count and one past the
/// highest endpoint seen, so every collected edge is in range. Counts above
/// [`MAX_BUILD_VERTICES`] are refused.
pub struct GraphBuilder<T> {
    vertices: usize,
    edges: Vec<(usize, usize, T)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new builder with no vertices.
    pub fn new() -> Self {
        Self {
            vertices: 0,
            edges: Vec::new(),
        }
    }

    /// Create a new builder with at least `vertices` vertices.
    pub fn with_vertices(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, src: usize, dst: usize, weight: T) -> &mut Self {
        self.edges.push((src, dst, weight));
        self
    }

    /// Number of vertices the built graph will have.
    ///
    /// Fails with `VertexOutOfRange` when an endpoint or the declared count
    /// would exceed [`MAX_BUILD_VERTICES`].
    pub fn vertex_count(&self) -> GraphResult<usize> {
        let mut count = self.vertices;
        for &(src, dst, _) in &self.edges {
            let top = src.max(dst);
            if top >= MAX_BUILD_VERTICES {
                return Err(GraphError::VertexOutOfRange {
                    index: top,
                    count: MAX_BUILD_VERTICES,
                });
            }
            count = count.max(top + 1);
        }
        if count > MAX_BUILD_VERTICES {
            return Err(GraphError::VertexOutOfRange {
                index: count - 1,
                count: MAX_BUILD_VERTICES,
            });
        }
        Ok(count)
    }

    /// Build a directed graph. Repeated edges keep the first weight.
    pub fn build_directed(self) -> GraphResult<DiGraph<T>> {
        let mut graph = DiGraph::new(self.vertex_count()?);
        for (src, dst, weight) in self.edges {
            if !graph.add_edge(src, dst, weight)? {
                log::debug!("skipping duplicate edge {} -> {}", src, dst);
            }
        }
        Ok(graph)
    }
}

impl<T: Clone> GraphBuilder<T> {
    /// Build an undirected graph. An edge whose pair is already present
    /// (in either direction) is skipped.
    pub fn build_undirected(self) -> GraphResult<UnGraph<T>> {
        let mut graph = UnGraph::new(self.vertex_count()?);
        for (src, dst, weight) in self.edges {
            if !graph.add_edge(src, dst, weight)? {
                log::debug!("skipping duplicate edge {} -- {}", src, dst);
            }
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<EdgeList<T>> for GraphBuilder<T> {
    fn from(list: EdgeList<T>) -> Self {
        Self {
            vertices: list.vertices.unwrap_or(0),
            edges: list.edges,
        }
    }
}
