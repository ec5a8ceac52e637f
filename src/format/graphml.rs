//! GraphML document writer.

use crate::graph::Adjacency;

const PREAMBLE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?> \n\
<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\" \n   \
xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \n   \
xsi:schemaLocation=\"http://graphml.graphdrawing.org/xmlns \n   \
http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd\">\n";

/// Render the graph as a GraphML document.
///
/// One `<node>` per vertex (`n0`, `n1`, ...) and one `<edge>` per stored
/// directed entry, so an undirected edge appears once in each direction.
/// Weights are not written.
pub fn to_graphml<G: Adjacency + ?Sized>(graph: &G) -> String {
    let mut res = String::from(PREAMBLE);
    res.push_str("  <graph id=\"G\" edgedefault=\"undirected\">\n");

    for v in 0..graph.num_verts() {
        res.push_str(&format!("    <node id=\"n{}\"/>\n", v));
    }

    for (src, dst, _) in graph.edges() {
        res.push_str(&format!(
            "    <edge source=\"n{}\" target=\"n{}\"/>\n",
            src, dst
        ));
    }

    res.push_str("  </graph>\n");
    res.push_str("</graphml>\n");
    res
}
