//! Export helpers for graph containers.
//!
//! Writers only use the read-only query surface of [`DirectedGraph`]:
//! `len`, indexed access and `adjacent_values`.

pub mod dot;

use crate::graph::DirectedGraph;
use crate::graph_error::GraphError;
use std::io::Write;

pub use dot::{DotWriter, to_dot};

/// Trait for writers that serialize a graph of `T` values.
pub trait GraphWriter<T> {
    /// Write the graph to a writer.
    fn write<W: Write>(&self, writer: W, graph: &DirectedGraph<T>) -> Result<(), GraphError>;

    /// Render the graph into a `String`.
    fn render(&self, graph: &DirectedGraph<T>) -> Result<String, GraphError> {
        let mut buf = Vec::new();
        self.write(&mut buf, graph)?;
        Ok(String::from_utf8(buf)?)
    }
}
