//! Graphviz DOT writer.
//!
//! Output layout, one line per entry:
//!
//! ```text
//! digraph <name> {
//! \t<from> -> <to>
//! \t<isolated value>
//! }
//! ```
//!
//! Nodes appear in index order. A node without out-edges gets a line holding
//! only its value; otherwise it gets one `from -> to` line per edge, targets
//! ascending by value.

use std::fmt::Display;
use std::io::Write;

use crate::graph::DirectedGraph;
use crate::graph_error::GraphError;
use crate::io::GraphWriter;

/// Writes a graph as a DOT `digraph` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotWriter {
    /// Name placed after the `digraph` keyword.
    pub graph_name: String,
}

impl DotWriter {
    pub fn new(graph_name: impl Into<String>) -> Self {
        Self {
            graph_name: graph_name.into(),
        }
    }
}

impl Default for DotWriter {
    fn default() -> Self {
        Self::new("G")
    }
}

impl<T: Display + Ord> GraphWriter<T> for DotWriter {
    fn write<W: Write>(&self, mut writer: W, graph: &DirectedGraph<T>) -> Result<(), GraphError> {
        writeln!(writer, "digraph {} {{", self.graph_name)?;
        for index in 0..graph.len() {
            let value = &graph[index];
            let targets = graph.adjacent_values(value);
            if targets.is_empty() {
                writeln!(writer, "\t{value}")?;
            }
            for target in targets {
                writeln!(writer, "\t{value} -> {target}")?;
            }
        }
        writeln!(writer, "}}")?;
        Ok(())
    }
}

/// Render `graph` as a DOT block named `graph_name`.
///
/// # Example
/// ```rust
/// use directed_graph::{DirectedGraph, io::to_dot};
/// let mut g = DirectedGraph::new();
/// g.insert(1);
/// g.insert(2);
/// g.insert_edge(&1, &2);
/// assert_eq!(to_dot(&g, "G").unwrap(), "digraph G {\n\t1 -> 2\n\t2\n}\n");
/// ```
pub fn to_dot<T: Display + Ord>(
    graph: &DirectedGraph<T>,
    graph_name: &str,
) -> Result<String, GraphError> {
    DotWriter::new(graph_name).render(graph)
}
