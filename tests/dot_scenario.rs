mod util;

use directed_graph::io::{DotWriter, GraphWriter, to_dot};
use util::sample_graph;

const BEFORE: &str = "digraph G {\n\
\t11 -> 33\n\
\t22 -> 33\n\
\t22 -> 44\n\
\t22 -> 55\n\
\t33 -> 44\n\
\t44 -> 55\n\
\t55\n\
}\n";

const AFTER: &str = "digraph G {\n\
\t11 -> 33\n\
\t22 -> 33\n\
\t22 -> 55\n\
\t33\n\
\t55\n\
}\n";

#[test]
fn export_of_five_node_graph() {
    let g = sample_graph();
    assert_eq!(to_dot(&g, "G").unwrap(), BEFORE);
}

#[test]
fn export_after_edge_and_node_removal() {
    let mut g = sample_graph();
    assert!(g.erase_edge(&22, &44));
    assert!(g.erase(&44));
    assert_eq!(g.len(), 4);
    assert_eq!(to_dot(&g, "G").unwrap(), AFTER);
}

#[test]
fn writer_and_render_agree() {
    let g = sample_graph();
    let mut buf = Vec::new();
    DotWriter::new("G").write(&mut buf, &g).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), BEFORE);
    assert_eq!(DotWriter::default().render(&g).unwrap(), BEFORE);
}

#[test]
fn graph_name_is_copied_verbatim() {
    let g = sample_graph();
    let out = to_dot(&g, "Graph1").unwrap();
    assert!(out.starts_with("digraph Graph1 {\n"));
    assert!(out.ends_with("\t55\n}\n"));
}
