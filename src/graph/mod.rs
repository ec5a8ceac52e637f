//! In-memory graph containers and the algorithms that run on them.

pub mod adjacency;
pub mod builder;
pub mod digraph;
pub mod stats;
pub mod traversal;
pub mod ungraph;

pub use adjacency::Adjacency;
pub use builder::GraphBuilder;
pub use digraph::DiGraph;
pub use stats::{degree_histogram, degree_stats};
pub use traversal::{bfs, bfs_traverse, BfsTree};
pub use ungraph::UnGraph;
