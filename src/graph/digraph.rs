//! Directed graph: one hash-indexed edge map per vertex.

use std::ops::Index;

use crate::types::{EdgeMap, GraphResult};

use super::Adjacency;

/// A directed graph over dense vertex indices `0..num_verts()`.
///
/// Vertices carry no payload; each one owns an [`EdgeMap`] of its outgoing
/// edges. The vertex set only grows: there is no vertex removal, and
/// `resize` refuses to shrink.
#[derive(Debug, Clone, PartialEq)]
pub struct DiGraph<T> {
    /// Outgoing edges, indexed by source vertex.
    adjacency: Vec<EdgeMap<T>>,
}

impl<T> DiGraph<T> {
    /// Create a graph with `num_verts` vertices and no edges.
    pub fn new(num_verts: usize) -> Self {
        let mut adjacency = Vec::with_capacity(num_verts);
        adjacency.resize_with(num_verts, EdgeMap::new);
        Self { adjacency }
    }

    /// Remove every vertex (and therefore every edge).
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Grow the graph to `num_verts` vertices.
    ///
    /// Returns false and leaves the graph untouched if `num_verts` is smaller
    /// than the current count, since dropping vertices would orphan edges
    /// that point at them.
    pub fn resize(&mut self, num_verts: usize) -> bool {
        if num_verts < self.adjacency.len() {
            log::debug!(
                "refusing to shrink graph from {} to {} vertices",
                self.adjacency.len(),
                num_verts
            );
            return false;
        }
        self.adjacency.resize_with(num_verts, EdgeMap::new);
        true
    }

    /// Add the edge `src -> dst` with `weight`.
    ///
    /// Returns `Ok(false)` without touching the stored weight if the edge
    /// already exists, and an error if either endpoint is not a vertex.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: T) -> GraphResult<bool> {
        self.check_vertex(dst)?;
        self.check_vertex(src)?;
        Ok(self.adjacency[src].insert(dst, weight))
    }

    /// Remove the edge `src -> dst`. Returns false if it did not exist.
    pub fn del_edge(&mut self, src: usize, dst: usize) -> bool {
        self.adjacency
            .get_mut(src)
            .is_some_and(|edges| edges.erase(dst))
    }

    /// Remove the edge `src -> dst` and return its weight.
    pub(crate) fn take_edge(&mut self, src: usize, dst: usize) -> Option<T> {
        self.adjacency
            .get_mut(src)?
            .remove_entry(dst)
            .map(|(_, weight)| weight)
    }

    /// Mutable edge map of `v`. Kept inside the crate so that wrappers can
    /// uphold their own invariants.
    pub(crate) fn adj_mut(&mut self, v: usize) -> Option<&mut EdgeMap<T>> {
        self.adjacency.get_mut(v)
    }

    /// Remove every edge that points at `v`, from any source.
    /// Returns the number of edges removed.
    pub fn del_in_edges(&mut self, v: usize) -> usize {
        self.adjacency
            .iter_mut()
            .map(|edges| edges.erase(v))
            .filter(|&removed| removed)
            .count()
    }

    /// Remove every edge leaving `v`. Returns the number of edges removed.
    pub fn del_out_edges(&mut self, v: usize) -> usize {
        match self.adjacency.get_mut(v) {
            Some(edges) => {
                let removed = edges.len();
                edges.clear();
                removed
            }
            None => 0,
        }
    }

    /// Capacity of the edge map of `v`.
    pub fn bucket_count(&self, v: usize) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v].bucket_count())
    }

    /// Load factor of the edge map of `v`.
    pub fn load_factor(&self, v: usize) -> GraphResult<f32> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v].load_factor())
    }

    /// Rehash the edge map of `v` to hold at least `buckets` entries.
    pub fn set_bucket_count(&mut self, v: usize, buckets: usize) -> GraphResult<()> {
        self.check_vertex(v)?;
        self.adjacency[v].rehash(buckets);
        Ok(())
    }

    /// Number of edges pointing at each vertex.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.adjacency.len()];
        for edges in &self.adjacency {
            for (&dst, _) in edges {
                degrees[dst] += 1;
            }
        }
        degrees
    }
}

impl<T: Clone> DiGraph<T> {
    /// Append a vertex whose outgoing edges are a copy of `seed`'s.
    /// Returns the index of the new vertex.
    pub fn add_vertex(&mut self, seed: usize) -> GraphResult<usize> {
        self.check_vertex(seed)?;
        let edges = self.adjacency[seed].clone();
        self.adjacency.push(edges);
        Ok(self.adjacency.len() - 1)
    }

    /// Append every vertex of `other` to this graph.
    ///
    /// Vertex `v` of `other` becomes `v + offset`, where `offset` is this
    /// graph's vertex count before the call, and the copied edges are
    /// renumbered the same way. Returns `offset`.
    pub fn append_graph(&mut self, other: &DiGraph<T>) -> usize {
        let offset = self.adjacency.len();
        self.adjacency.reserve(other.adjacency.len());
        for edges in &other.adjacency {
            let shifted: EdgeMap<T> = edges
                .iter()
                .map(|(dst, weight)| (dst + offset, weight.clone()))
                .collect();
            self.adjacency.push(shifted);
        }
        log::debug!(
            "appended {} vertices at offset {}",
            other.adjacency.len(),
            offset
        );
        offset
    }
}

impl<T: Default> DiGraph<T> {
    /// Build a forest from a parent array.
    ///
    /// The graph gets `parents.len()` vertices and an edge `p -> i` with a
    /// default weight for every `parents[i] == Some(p)` with `p` in range.
    /// `None` and out-of-range parents contribute no edge.
    pub fn from_parents(parents: &[Option<usize>]) -> Self {
        let mut graph = Self::new(parents.len());
        for (child, parent) in parents.iter().enumerate() {
            if let Some(p) = *parent {
                if p < parents.len() {
                    graph.adjacency[p].insert(child, T::default());
                }
            }
        }
        graph
    }
}

impl<T> Adjacency for DiGraph<T> {
    type Weight = T;

    fn num_verts(&self) -> usize {
        self.adjacency.len()
    }

    fn adj(&self, v: usize) -> Option<&EdgeMap<T>> {
        self.adjacency.get(v)
    }
}

impl<T> Index<usize> for DiGraph<T> {
    type Output = EdgeMap<T>;

    /// Outgoing edges of `v`. Panics if `v` is not a vertex; use
    /// [`Adjacency::adj`] for a checked lookup.
    fn index(&self, v: usize) -> &EdgeMap<T> {
        &self.adjacency[v]
    }
}
