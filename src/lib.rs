//! hashgraph: index-based directed and undirected graphs.
//!
//! Vertices are dense indices `0..n` with no payload; each vertex owns a
//! hash map from neighbour index to edge weight. Graphs only grow. The
//! `format` module renders graphs as GraphML, DIMACS, adjacency matrices and
//! DOT for external drawing and max-flow tools.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{
    parse_edge_list, read_edge_list, to_adj_matrix, to_digraph_dot, to_dimacs, to_dot, to_graphml,
    EdgeList,
};
pub use graph::{
    bfs, bfs_traverse, degree_histogram, degree_stats, Adjacency, BfsTree, DiGraph, GraphBuilder,
    UnGraph,
};
pub use types::{
    DegreeStats, EdgeMap, GraphError, GraphInfo, GraphResult, DOT_GRAPH_NAME, MATRIX_MISSING,
    MAX_BUILD_VERTICES,
};
