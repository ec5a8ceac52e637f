//! Build a small graph, search it, and export it.

use hashgraph::*;

fn main() -> GraphResult<()> {
    // A directed triangle plus an isolated vertex
    let mut graph: DiGraph<i32> = DiGraph::new(4);
    graph.add_edge(0, 1, 5)?;
    graph.add_edge(1, 2, 3)?;
    graph.add_edge(2, 0, 7)?;

    println!(
        "Directed graph with {} vertices and {} edges",
        graph.num_verts(),
        graph.num_edges()
    );

    let parents = graph.bfs(0)?;
    println!("BFS parents from 0: {:?}", parents);

    print!("{}", to_dimacs(&graph, 0, 2)?);
    print!("{}", to_adj_matrix(&graph));

    // The same shape as an undirected graph
    let mut ring: UnGraph<i32> = UnGraph::new(4);
    ring.add_edge(0, 1, 5)?;
    ring.add_edge(1, 2, 3)?;
    ring.add_edge(2, 0, 7)?;

    let stats = ring.degree_stats()?;
    println!(
        "Degrees: min {} max {} avg {:.2}",
        stats.min, stats.max, stats.avg
    );
    print!("{}", to_dot(&ring, false));

    Ok(())
}
