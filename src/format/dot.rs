//! Graphviz DOT writers.

use std::fmt::Display;

use crate::graph::Adjacency;
use crate::types::DOT_GRAPH_NAME;

fn attributes<W: Display>(weight: &W, label: bool) -> String {
    if label {
        format!("[weight={}, label=\"{}\"]", weight, weight)
    } else {
        format!("[weight={}]", weight)
    }
}

/// Render an undirected graph for `neato`/`sfdp`.
///
/// Each pair is written once, from the lower index to the higher one
/// (`u -- v` with `v > u`); self-loops are not written. With `label` set,
/// the weight is also shown as the edge label.
pub fn to_dot<G>(graph: &G, label: bool) -> String
where
    G: Adjacency + ?Sized,
    G::Weight: Display,
{
    let mut res = format!("graph {} {{\n", DOT_GRAPH_NAME);
    res.push_str("   overlap=\"false\";\n");

    for (src, dst, weight) in graph.edges() {
        if dst > src {
            res.push_str(&format!(
                "   {} -- {} {};\n",
                src,
                dst,
                attributes(weight, label)
            ));
        }
    }

    res.push_str("}\n");
    res
}

/// Render a directed graph: one `u -> v` line per stored edge.
pub fn to_digraph_dot<G>(graph: &G, label: bool) -> String
where
    G: Adjacency + ?Sized,
    G::Weight: Display,
{
    let mut res = format!("digraph {} {{\n", DOT_GRAPH_NAME);
    res.push_str("   overlap=\"false\";\n");

    for (src, dst, weight) in graph.edges() {
        res.push_str(&format!(
            "   {} -> {} {};\n",
            src,
            dst,
            attributes(weight, label)
        ));
    }

    res.push_str("}\n");
    res
}
