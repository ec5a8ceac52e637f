//! DIMACS max-flow problem writer.

use std::fmt::Display;

use crate::graph::Adjacency;
use crate::types::GraphResult;

/// Render the graph as a DIMACS max-flow problem with the given source and
/// sink vertices. Vertex numbers in the output are 1-based.
///
/// ```text
/// c toDIMACS()
/// p max     <vertices>    <edges>
/// n         <source>  s
/// n         <sink>  t
/// a       <u>       <v>       <capacity>
/// ```
pub fn to_dimacs<G>(graph: &G, source: usize, sink: usize) -> GraphResult<String>
where
    G: Adjacency + ?Sized,
    G::Weight: Display,
{
    graph.check_vertex(source)?;
    graph.check_vertex(sink)?;

    let mut res = String::from("c toDIMACS()\n");
    res.push_str(&format!(
        "p max     {}    {}\n",
        graph.num_verts(),
        graph.num_edges()
    ));
    res.push_str(&format!("n         {}  s\n", source + 1));
    res.push_str(&format!("n         {}  t\n", sink + 1));

    for (src, dst, weight) in graph.edges() {
        res.push_str(&format!(
            "a       {}       {}       {}\n",
            src + 1,
            dst + 1,
            weight
        ));
    }

    Ok(res)
}
