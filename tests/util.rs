#![allow(dead_code)]
use directed_graph::DirectedGraph;

/// Build a graph from values (in order) and value-level edges.
pub fn graph_from(values: &[u32], edges: &[(u32, u32)]) -> DirectedGraph<u32> {
    let mut g = DirectedGraph::new();
    for &v in values {
        g.insert(v);
    }
    for (a, b) in edges {
        assert!(g.insert_edge(a, b), "edge {a} -> {b} rejected");
    }
    g
}

/// The five-node graph used throughout the export tests.
pub fn sample_graph() -> DirectedGraph<u32> {
    graph_from(
        &[11, 22, 33, 44, 55],
        &[(11, 33), (22, 33), (22, 44), (22, 55), (33, 44), (44, 55)],
    )
}

/// All edges as sorted value pairs.
pub fn value_edges(g: &DirectedGraph<u32>) -> Vec<(u32, u32)> {
    let mut out: Vec<(u32, u32)> = g
        .iter()
        .flat_map(|v| g.adjacent_values(v).into_iter().map(move |t| (*v, *t)))
        .collect();
    out.sort_unstable();
    out
}

/// Assert no adjacency index points past the end of the node sequence.
pub fn assert_no_dangling(g: &DirectedGraph<u32>) {
    for (i, node) in g.nodes().iter().enumerate() {
        for &t in node.adjacency() {
            assert!(t < g.len(), "node {i} points to {t}, len {}", g.len());
        }
    }
}
