//! Graph traversal algorithms (BFS).

use std::collections::VecDeque;

use crate::types::GraphResult;

use super::Adjacency;

/// Result of a breadth-first search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    /// Root of the search.
    pub root: usize,
    /// Vertices in the order they were discovered, starting with the root.
    pub order: Vec<usize>,
    /// BFS-tree parent of each vertex; `None` for the root and unreached vertices.
    pub parent: Vec<Option<usize>>,
    /// Hop count from the root; `None` for unreached vertices.
    pub depth: Vec<Option<usize>>,
}

impl BfsTree {
    /// Whether `v` was reached from the root.
    pub fn reached(&self, v: usize) -> bool {
        self.depth.get(v).is_some_and(Option::is_some)
    }

    /// Vertices on the tree path from the root to `v`, root first.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.reached(v) {
            return None;
        }
        let mut path = vec![v];
        let mut current = v;
        while let Some(p) = self.parent[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some(path)
    }
}

/// BFS over outgoing edges, ignoring weights.
///
/// Each vertex is enqueued at most once. Neighbours of a dequeued vertex are
/// discovered in ascending index order so the tree is deterministic.
pub fn bfs_traverse<G: Adjacency + ?Sized>(graph: &G, src: usize) -> GraphResult<BfsTree> {
    graph.check_vertex(src)?;

    let n = graph.num_verts();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut depth: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[src] = true;
    depth[src] = Some(0);
    order.push(src);
    queue.push_back(src);

    while let Some(v) = queue.pop_front() {
        let Some(edges) = graph.adj(v) else {
            continue;
        };
        let next_depth = depth[v].map(|d| d + 1);
        for w in edges.destinations() {
            if visited[w] {
                continue;
            }
            visited[w] = true;
            parent[w] = Some(v);
            depth[w] = next_depth;
            order.push(w);
            queue.push_back(w);
        }
    }

    log::trace!("bfs from {} reached {} of {} vertices", src, order.len(), n);

    Ok(BfsTree {
        root: src,
        order,
        parent,
        depth,
    })
}

/// BFS parent array from `src`: `parent[v]` is the vertex that discovered
/// `v`, `None` for `src` itself and for vertices that were not reached.
pub fn bfs<G: Adjacency + ?Sized>(graph: &G, src: usize) -> GraphResult<Vec<Option<usize>>> {
    bfs_traverse(graph, src).map(|tree| tree.parent)
}
