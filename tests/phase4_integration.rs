//! Phase 4 tests: edge-list input, builder, CLI integration and end-to-end flows.

use std::io::Write;
use std::process::{Command, Output};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use hashgraph::format::{parse_edge_list, read_edge_list, EdgeList};
use hashgraph::graph::{bfs_traverse, Adjacency, DiGraph, GraphBuilder};
use hashgraph::types::{GraphError, MAX_BUILD_VERTICES};

const TRIANGLE: &str = "\
# directed triangle with an isolated vertex
vertices 4
0 1 5
1 2 3
2 0 7   # closing edge
";

// ==================== CLI Helpers ====================

/// Run the `hgraph` CLI with the given arguments and return the output.
fn run_hgraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hgraph"))
        .args(args)
        .output()
        .expect("Failed to run hgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "hgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write `contents` to a fresh temporary file.
fn fixture(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

// ==================== Edge List Tests ====================

#[test]
fn test_parse_edge_list() {
    let list: EdgeList<i32> = parse_edge_list(TRIANGLE).unwrap();
    assert_eq!(list.vertices, Some(4));
    assert_eq!(list.edges, vec![(0, 1, 5), (1, 2, 3), (2, 0, 7)]);
}

#[test]
fn test_parse_default_weight() {
    let list: EdgeList<f64> = parse_edge_list("3 4\n\n  5 6 0.25\n").unwrap();
    assert_eq!(list.vertices, None);
    assert_eq!(list.edges, vec![(3, 4, 0.0), (5, 6, 0.25)]);
}

#[test]
fn test_parse_errors_report_line() {
    let cases = [
        ("0 1\nx 2\n", 2),
        ("0 1 2 3\n", 1),
        ("0\n", 1),
        ("vertices 3\nvertices 4\n", 2),
        ("vertices\n", 1),
        ("# ok\n1 2 heavy\n", 2),
        ("1 -2\n", 1),
    ];
    for (text, expected_line) in cases {
        match parse_edge_list::<i32>(text) {
            Err(GraphError::Parse { line, .. }) => assert_eq!(line, expected_line, "{:?}", text),
            other => panic!("Expected parse error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_parse_rejects_endpoint_past_declared_count() {
    match parse_edge_list::<i32>("vertices 3\n0 1\n1 3 2\n") {
        Err(GraphError::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("declared vertex count 3"), "{}", message);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }

    // The directive may follow the edges it constrains.
    match parse_edge_list::<i32>("0 5\nvertices 2\n") {
        Err(GraphError::Parse { line, .. }) => assert_eq!(line, 1),
        other => panic!("Expected parse error, got {:?}", other),
    }

    let list: EdgeList<i32> = parse_edge_list("vertices 3\n0 2\n").unwrap();
    assert_eq!(list.edges, vec![(0, 2, 0)]);
}

#[test]
fn test_read_edge_list_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_edge_list::<i32>(&dir.path().join("missing.txt"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_vertex_count() {
    let mut builder: GraphBuilder<i32> = GraphBuilder::with_vertices(3);
    builder.link(0, 7, 1).link(2, 1, 1);
    assert_eq!(builder.vertex_count().unwrap(), 8);

    let graph = builder.build_directed().unwrap();
    assert_eq!(graph.num_verts(), 8);
    assert_eq!(graph.num_edges(), 2);
}

#[test]
fn test_builder_rejects_huge_endpoints() {
    let list: EdgeList<i64> = parse_edge_list(&format!("0 {} 1\n", usize::MAX)).unwrap();
    assert!(matches!(
        GraphBuilder::from(list).build_directed(),
        Err(GraphError::VertexOutOfRange { index: usize::MAX, count: MAX_BUILD_VERTICES })
    ));

    let list: EdgeList<i64> = parse_edge_list("0 4000000000\n").unwrap();
    assert!(matches!(
        GraphBuilder::from(list).build_undirected(),
        Err(GraphError::VertexOutOfRange { index: 4_000_000_000, .. })
    ));

    let declared: GraphBuilder<i64> = GraphBuilder::with_vertices(MAX_BUILD_VERTICES + 1);
    assert!(declared.vertex_count().is_err());

    let mut at_limit: GraphBuilder<i64> = GraphBuilder::new();
    at_limit.link(0, MAX_BUILD_VERTICES - 1, 1);
    assert_eq!(at_limit.vertex_count().unwrap(), MAX_BUILD_VERTICES);
}

#[test]
fn test_builder_skips_duplicates() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut builder = GraphBuilder::new();
    builder.link(0, 1, 1).link(0, 1, 2).link(1, 0, 3);

    let directed = GraphBuilder::from(EdgeList {
        vertices: None,
        edges: vec![(0, 1, 1), (0, 1, 2), (1, 0, 3)],
    })
    .build_directed()
    .unwrap();
    assert_eq!(directed.num_edges(), 2);
    assert_eq!(directed.find_edge(0, 1), Some(&1));

    let undirected = builder.build_undirected().unwrap();
    assert_eq!(undirected.num_edges(), 2);
    assert_eq!(undirected.find_edge(1, 0), Some(&1));
}

#[test]
fn test_builder_from_edge_list() {
    let list: EdgeList<i32> = parse_edge_list(TRIANGLE).unwrap();
    let graph = GraphBuilder::from(list).build_directed().unwrap();
    assert_eq!(graph.num_verts(), 4);
    assert_eq!(graph.bfs(0).unwrap(), vec![None, Some(0), Some(1), None]);
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let tmp = fixture(TRIANGLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_hgraph(&["info", path]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Vertices: 4"));
    assert!(out.contains("Edges: 3"));

    let output = run_hgraph(&["--format", "json", "info", path, "--undirected"]);
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(info["vertices"], 4);
    assert_eq!(info["edges"], 6);
    assert_eq!(info["undirected"], true);
}

#[test]
fn test_cli_export_dimacs() {
    let tmp = fixture(TRIANGLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_hgraph(&["export", path, "--to", "dimacs", "--source", "0", "--sink", "2"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.starts_with("c toDIMACS()\np max     4    3\n"));
    assert!(out.contains("n         3  t\n"));
    assert!(out.contains("a       1       2       5\n"));
}

#[test]
fn test_cli_export_dot_and_matrix() {
    let tmp = fixture(TRIANGLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_hgraph(&["export", path, "--to", "dot", "--undirected"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("   0 -- 2 [weight=7];\n"));

    let output = run_hgraph(&["export", path, "--to", "matrix"]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "[[-1,5,-1,-1],\n[-1,-1,3,-1],\n[7,-1,-1,-1],\n[-1,-1,-1,-1]]\n"
    );

    let output = run_hgraph(&["export", path, "--to", "graphml"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).matches("<edge ").count(), 3);
}

#[test]
fn test_cli_bfs_json() {
    let tmp = fixture(TRIANGLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_hgraph(&["--format", "json", "bfs", path, "0"]);
    assert_success(&output);
    let result: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(result["parent"], serde_json::json!([null, 0, 1, null]));
    assert_eq!(result["order"], serde_json::json!([0, 1, 2]));

    let output = run_hgraph(&["bfs", path, "0"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Parents: - 0 1 -"));
}

#[test]
fn test_cli_stats() {
    let tmp = fixture(TRIANGLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_hgraph(&["stats", path]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Min degree: 0"));
    assert!(out.contains("Max degree: 2"));
    assert!(out.contains("Avg degree: 1.500"));

    let output = run_hgraph(&["--format", "json", "stats", path]);
    assert_success(&output);
    let stats: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(stats["degree"]["max"], 2);
    assert_eq!(stats["edges"], 3);
}

#[test]
fn test_cli_error_exit_codes() {
    let tmp = fixture(TRIANGLE);
    let path = tmp.path().to_str().unwrap();

    let output = run_hgraph(&["export", path, "--to", "dimacs", "--sink", "9"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run_hgraph(&["export", path, "--to", "png"]);
    assert_eq!(output.status.code(), Some(3));

    let bad = fixture("0 1\n1 two\n");
    let output = run_hgraph(&["info", bad.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let huge = fixture(&format!("0 {} 1\n", usize::MAX));
    let output = run_hgraph(&["info", huge.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(4));

    let past_declared = fixture("vertices 2\n0 2\n");
    let output = run_hgraph(&["stats", past_declared.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let empty = fixture("# nothing here\n");
    let output = run_hgraph(&["stats", empty.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_cli_verbose_enables_debug_logging() {
    let tmp = fixture("0 1 1\n0 1 2\n");
    let path = tmp.path().to_str().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hgraph"))
        .args(["--verbose", "info", path])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run hgraph");
    assert_success(&output);
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("skipping duplicate edge 0 -> 1"), "{}", err);

    let output = Command::new(env!("CARGO_BIN_EXE_hgraph"))
        .args(["info", path])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run hgraph");
    assert_success(&output);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("skipping duplicate edge"));
}

// ==================== End-to-End Library Tests ====================

#[test]
fn test_bfs_tree_matches_random_edges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let n = rng.gen_range(1..60);
        let mut graph: DiGraph<u8> = DiGraph::new(n);
        for _ in 0..(n * 2) {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            graph.add_edge(u, v, 1).unwrap();
        }

        let root = rng.gen_range(0..n);
        let tree = bfs_traverse(&graph, root).unwrap();
        assert_eq!(tree.parent[root], None);
        for &v in &tree.order {
            if v == root {
                continue;
            }
            let p = tree.parent[v].expect("reached vertex has a parent");
            assert!(graph.find_edge(p, v).is_some());
            assert!(tree.reached(p));
            assert_eq!(tree.depth[v], tree.depth[p].map(|d| d + 1));
        }
        for v in 0..n {
            if !tree.reached(v) {
                assert_eq!(tree.parent[v], None);
            }
        }
    }
}

#[test]
fn test_parent_array_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 200;
    // Random tree rooted at 0: every vertex hangs off an earlier one.
    let parents: Vec<Option<usize>> = (0..n)
        .map(|i| if i == 0 { None } else { Some(rng.gen_range(0..i)) })
        .collect();

    let graph: DiGraph<u32> = DiGraph::from_parents(&parents);
    assert_eq!(graph.num_edges(), n - 1);
    assert_eq!(graph.bfs(0).unwrap(), parents);
}
