//! Undirected graph stored as a symmetric directed graph.

use std::ops::Index;

use crate::types::{DegreeStats, EdgeMap, GraphResult};

use super::{stats, Adjacency, DiGraph};

/// An undirected graph.
///
/// Structurally identical to a [`DiGraph`]; the difference is that every
/// stored edge `(u, v, w)` has a reciprocal `(v, u, w)`. A self-loop is a
/// single entry that is its own reciprocal. Only pair-wise mutators are
/// exposed, so the symmetry cannot be broken from outside the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct UnGraph<T> {
    inner: DiGraph<T>,
}

impl<T> UnGraph<T> {
    /// Create a graph with `num_verts` vertices and no edges.
    pub fn new(num_verts: usize) -> Self {
        Self {
            inner: DiGraph::new(num_verts),
        }
    }

    /// Remove every vertex.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Grow to `num_verts` vertices; false if that would shrink the graph.
    pub fn resize(&mut self, num_verts: usize) -> bool {
        self.inner.resize(num_verts)
    }

    /// Append an isolated vertex and return its index.
    pub fn add_vertex(&mut self) -> usize {
        let v = self.inner.num_verts();
        self.inner.resize(v + 1);
        v
    }

    /// Remove the edge between `src` and `dst` in both directions.
    ///
    /// Nothing is removed unless both directions are present.
    pub fn del_edge(&mut self, src: usize, dst: usize) -> bool {
        let forward = self.inner.find_edge(src, dst).is_some();
        let backward = self.inner.find_edge(dst, src).is_some();
        if !(forward && backward) {
            if forward != backward {
                log::warn!("asymmetric edge between {} and {} left in place", src, dst);
            }
            return false;
        }
        self.inner.take_edge(src, dst);
        if src != dst {
            self.inner.take_edge(dst, src);
        }
        true
    }

    /// Remove every edge touching `v`. Returns the number of undirected
    /// edges removed (a self-loop counts once).
    pub fn del_all_edges(&mut self, v: usize) -> usize {
        let neighbours = match self.inner.adj(v) {
            Some(edges) => edges.destinations(),
            None => return 0,
        };
        for &w in &neighbours {
            if w != v {
                self.inner.del_edge(w, v);
            }
        }
        self.inner.del_out_edges(v);
        neighbours.len()
    }

    /// Number of undirected edges: each reciprocal pair once, self-loops once.
    pub fn num_undirected_edges(&self) -> usize {
        (0..self.inner.num_verts())
            .filter_map(|v| self.inner.adj(v).map(|edges| (v, edges)))
            .map(|(v, edges)| edges.iter().filter(|&(w, _)| w >= v).count())
            .sum()
    }

    /// Minimum, maximum and average vertex degree.
    ///
    /// Fails with `GraphError::EmptyGraph` when there are no vertices.
    pub fn degree_stats(&self) -> GraphResult<DegreeStats> {
        stats::degree_stats(self)
    }

    /// Capacity of the edge map of `v`.
    pub fn bucket_count(&self, v: usize) -> GraphResult<usize> {
        self.inner.bucket_count(v)
    }

    /// Load factor of the edge map of `v`.
    pub fn load_factor(&self, v: usize) -> GraphResult<f32> {
        self.inner.load_factor(v)
    }

    /// Rehash the edge map of `v` to hold at least `buckets` entries.
    pub fn set_bucket_count(&mut self, v: usize, buckets: usize) -> GraphResult<()> {
        self.inner.set_bucket_count(v, buckets)
    }

    /// Borrow the underlying directed storage.
    pub fn as_directed(&self) -> &DiGraph<T> {
        &self.inner
    }

    /// Give up the symmetry guarantee and return the directed storage.
    pub fn into_directed(self) -> DiGraph<T> {
        self.inner
    }
}

impl<T: Clone> UnGraph<T> {
    /// Add an undirected edge between `src` and `dst`.
    ///
    /// Both directions are inserted, or neither: `Ok(false)` if either one
    /// already exists. A self-loop stores a single entry. Errors if either
    /// endpoint is not a vertex.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: T) -> GraphResult<bool> {
        self.inner.check_vertex(src)?;
        self.inner.check_vertex(dst)?;
        if self.inner.find_edge(src, dst).is_some() || self.inner.find_edge(dst, src).is_some() {
            return Ok(false);
        }
        if src != dst {
            self.inner.add_edge(dst, src, weight.clone())?;
        }
        self.inner.add_edge(src, dst, weight)
    }

    /// Set the weight of an existing edge in both directions.
    /// Returns false if the edge does not exist.
    pub fn update_weight(&mut self, src: usize, dst: usize, weight: T) -> bool {
        if self.inner.find_edge(src, dst).is_none() || self.inner.find_edge(dst, src).is_none() {
            return false;
        }
        let slots = [(src, dst), (dst, src)];
        for (u, v) in slots {
            if let Some(slot) = self.inner.adj_mut(u).and_then(|edges| edges.find_mut(v)) {
                *slot = weight.clone();
            }
        }
        true
    }

    /// Append every vertex of `other`, renumbered by this graph's previous
    /// vertex count. Returns that offset.
    pub fn append_graph(&mut self, other: &UnGraph<T>) -> usize {
        self.inner.append_graph(&other.inner)
    }
}

impl<T> Adjacency for UnGraph<T> {
    type Weight = T;

    fn num_verts(&self) -> usize {
        self.inner.num_verts()
    }

    fn adj(&self, v: usize) -> Option<&EdgeMap<T>> {
        self.inner.adj(v)
    }
}

impl<T> Index<usize> for UnGraph<T> {
    type Output = EdgeMap<T>;

    fn index(&self, v: usize) -> &EdgeMap<T> {
        &self.inner[v]
    }
}
