//! Read-only view shared by the directed and undirected graphs.

use crate::types::{EdgeMap, GraphError, GraphResult};

use super::traversal;

/// Read access to an index-based adjacency structure.
///
/// Traversal, statistics and every text exporter are written against this
/// trait, so they work the same on `DiGraph` and `UnGraph`.
pub trait Adjacency {
    /// Edge weight type.
    type Weight;

    /// Number of vertices.
    fn num_verts(&self) -> usize;

    /// Outgoing edges of `v`, or `None` if `v` is not a vertex.
    fn adj(&self, v: usize) -> Option<&EdgeMap<Self::Weight>>;

    /// Number of stored directed edges. Computed on every call.
    fn num_edges(&self) -> usize {
        (0..self.num_verts())
            .filter_map(|v| self.adj(v))
            .map(EdgeMap::len)
            .sum()
    }

    /// Weight of the edge `src -> dst`, if present.
    fn find_edge(&self, src: usize, dst: usize) -> Option<&Self::Weight> {
        self.adj(src)?.find(dst)
    }

    /// Number of outgoing edges of `v`.
    fn out_degree(&self, v: usize) -> Option<usize> {
        self.adj(v).map(EdgeMap::len)
    }

    /// Error unless `v` is a vertex of this graph.
    fn check_vertex(&self, v: usize) -> GraphResult<()> {
        let count = self.num_verts();
        if v < count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { index: v, count })
        }
    }

    /// Every stored edge as `(src, dst, weight)`, ordered by `src` then `dst`.
    fn edges(&self) -> Vec<(usize, usize, &Self::Weight)> {
        let mut out = Vec::with_capacity(self.num_edges());
        for v in 0..self.num_verts() {
            if let Some(map) = self.adj(v) {
                out.extend(map.iter_sorted().into_iter().map(|(dst, w)| (v, dst, w)));
            }
        }
        out
    }

    /// Index of the masked-in vertex with the smallest out-degree.
    ///
    /// `include[v]` selects vertex `v`; entries past `num_verts()` are
    /// ignored. Ties go to the lowest index. `None` if nothing is selected.
    fn min_out_degree_index(&self, include: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (v, &wanted) in include.iter().enumerate().take(self.num_verts()) {
            if !wanted {
                continue;
            }
            let degree = self.out_degree(v).unwrap_or(0);
            match best {
                Some((_, min)) if degree >= min => {}
                _ => best = Some((v, degree)),
            }
        }
        best.map(|(v, _)| v)
    }

    /// Breadth-first search from `src`; see [`traversal::bfs`].
    fn bfs(&self, src: usize) -> GraphResult<Vec<Option<usize>>> {
        traversal::bfs(self, src)
    }
}
