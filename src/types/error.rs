//! Error types for the hashgraph library.

use thiserror::Error;

/// All errors that can occur in the hashgraph library.
///
/// Duplicate insertions, missing edges and rejected shrinks are not errors;
/// those are reported through `bool` / `Option` return values.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex index is not in `[0, count)`.
    #[error("Vertex index {index} out of range (graph has {count} vertices)")]
    VertexOutOfRange { index: usize, count: usize },

    /// Statistics were requested on a graph with no vertices.
    #[error("Graph has no vertices")]
    EmptyGraph,

    /// Malformed edge-list input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for hashgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
