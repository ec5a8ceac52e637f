//! Bracketed adjacency-matrix writer.

use std::fmt::Display;

use crate::graph::Adjacency;
use crate::types::MATRIX_MISSING;

/// Render the graph as a row-major matrix: `[[a,b],\n[c,d]]\n`.
///
/// Cell `(u, v)` holds the weight of `u -> v`, or `T::from(-1)` when there
/// is no such edge. A graph with no vertices renders as an empty string.
pub fn to_adj_matrix<G>(graph: &G) -> String
where
    G: Adjacency + ?Sized,
    G::Weight: Display + From<i8>,
{
    let n = graph.num_verts();
    if n == 0 {
        return String::new();
    }

    let missing = <G::Weight as From<i8>>::from(MATRIX_MISSING);
    let mut res = String::from("[");
    for u in 0..n {
        res.push_str(if u == 0 { "[" } else { ",\n[" });
        let cells: Vec<String> = (0..n)
            .map(|v| match graph.find_edge(u, v) {
                Some(weight) => weight.to_string(),
                None => missing.to_string(),
            })
            .collect();
        res.push_str(&cells.join(","));
        res.push(']');
    }
    res.push_str("]\n");
    res
}
