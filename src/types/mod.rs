//! Shared data types for the hashgraph library.

pub mod edge;
pub mod error;
pub mod stats;

pub use edge::EdgeMap;
pub use error::{GraphError, GraphResult};
pub use stats::{DegreeStats, GraphInfo};

/// Value written into adjacency-matrix cells that have no edge.
/// Converted to the weight type with `T::from`.
pub const MATRIX_MISSING: i8 = -1;

/// Largest vertex count `GraphBuilder` will allocate. Edge lists naming a
/// higher endpoint are rejected instead of exhausting memory.
pub const MAX_BUILD_VERTICES: usize = 1 << 24;

/// Graph identifier used by the DOT writers.
pub const DOT_GRAPH_NAME: &str = "graphname";
