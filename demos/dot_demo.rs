//! Builds a small graph, prints it as DOT, removes an edge and a node, and
//! prints it again.
//!
//! Run with `cargo run --example dot_demo`.

use directed_graph::prelude::*;

fn main() -> Result<(), GraphError> {
    let mut graph = DirectedGraph::new();
    for v in [11, 22, 33, 44, 55] {
        graph.insert(v);
    }
    for (from, to) in [(11, 33), (22, 33), (22, 44), (22, 55), (33, 44), (44, 55)] {
        graph.insert_edge(&from, &to);
    }
    print!("{}", to_dot(&graph, "Graph1")?);

    graph.erase_edge(&22, &44);
    graph.erase(&44);
    print!("{}", to_dot(&graph, "Graph1")?);

    println!("Size: {}", graph.len());
    Ok(())
}
