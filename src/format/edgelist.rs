//! Plain-text edge-list reader.
//!
//! ```text
//! # comment
//! vertices 4
//! 0 1 5
//! 1 2 3
//! 2 0
//! ```
//!
//! One edge per line as `src dst [weight]`. A missing weight is the weight
//! type's default. The optional `vertices N` directive fixes the vertex
//! count, which keeps trailing isolated vertices; an edge naming an endpoint
//! at or above `N` is then a parse error.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use crate::types::{GraphError, GraphResult};

/// Parsed edge-list contents.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList<T> {
    /// Value of the `vertices` directive, if present.
    pub vertices: Option<usize>,
    /// Edges in file order.
    pub edges: Vec<(usize, usize, T)>,
}

fn parse_field<V>(token: &str, what: &str, line: usize) -> GraphResult<V>
where
    V: FromStr,
    V::Err: Display,
{
    token.parse().map_err(|e: V::Err| GraphError::Parse {
        line,
        message: format!("invalid {} {:?}: {}", what, token, e),
    })
}

/// Parse edge-list text. Line numbers in errors are 1-based.
pub fn parse_edge_list<T>(text: &str) -> GraphResult<EdgeList<T>>
where
    T: FromStr + Default,
    T::Err: Display,
{
    let mut list = EdgeList {
        vertices: None,
        edges: Vec::new(),
    };
    // Source line of each edge, for reporting endpoints past `vertices N`.
    let mut edge_lines = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or("");
        let tokens: Vec<&str> = content.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["vertices", count] => {
                if list.vertices.is_some() {
                    return Err(GraphError::Parse {
                        line,
                        message: "vertices declared more than once".to_string(),
                    });
                }
                list.vertices = Some(parse_field(count, "vertex count", line)?);
            }
            ["vertices", ..] => {
                return Err(GraphError::Parse {
                    line,
                    message: "expected `vertices N`".to_string(),
                });
            }
            [src, dst] => {
                let src = parse_field(src, "source", line)?;
                let dst = parse_field(dst, "destination", line)?;
                list.edges.push((src, dst, T::default()));
                edge_lines.push(line);
            }
            [src, dst, weight] => {
                let src = parse_field(src, "source", line)?;
                let dst = parse_field(dst, "destination", line)?;
                let weight = parse_field(weight, "weight", line)?;
                list.edges.push((src, dst, weight));
                edge_lines.push(line);
            }
            _ => {
                return Err(GraphError::Parse {
                    line,
                    message: format!("expected `src dst [weight]`, got {:?}", content.trim()),
                });
            }
        }
    }

    if let Some(count) = list.vertices {
        for (&(src, dst, _), &line) in list.edges.iter().zip(&edge_lines) {
            let top = src.max(dst);
            if top >= count {
                return Err(GraphError::Parse {
                    line,
                    message: format!("endpoint {} exceeds declared vertex count {}", top, count),
                });
            }
        }
    }

    Ok(list)
}

/// Read and parse an edge-list file.
pub fn read_edge_list<T>(path: &Path) -> GraphResult<EdgeList<T>>
where
    T: FromStr + Default,
    T::Err: Display,
{
    let text = std::fs::read_to_string(path)?;
    parse_edge_list(&text)
}
