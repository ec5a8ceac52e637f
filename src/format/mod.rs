//! Text formats: exporters for external graph tools and the edge-list reader.

pub mod dimacs;
pub mod dot;
pub mod edgelist;
pub mod graphml;
pub mod matrix;

pub use dimacs::to_dimacs;
pub use dot::{to_digraph_dot, to_dot};
pub use edgelist::{parse_edge_list, read_edge_list, EdgeList};
pub use graphml::to_graphml;
pub use matrix::to_adj_matrix;
