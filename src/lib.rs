#![cfg_attr(docsrs, feature(doc_cfg))]
//! # directed-graph
//!
//! directed-graph is an in-memory directed graph that behaves like a sequence
//! container of unique node values. Alongside the usual sequence operations
//! (`len`, indexing, bidirectional iteration) it offers edge insertion and
//! removal, adjacency queries, value-level graph equality, and DOT export.
//!
//! ## Representation
//! Nodes live in a `Vec`. Each node stores its out-edges as the indices of
//! their target nodes in that same vector. Appending keeps every index valid;
//! erasing a node renumbers the edges of all remaining nodes in one pass
//! before the call returns. Indices and [`NodePos`] positions taken before a
//! mutation must therefore not be reused after it.
//!
//! ## Errors
//! Absent values are reported through `bool`/`Option` returns. Reportable
//! failures (checked access out of range, export I/O) use [`GraphError`].
//!
//! ## Invariant checking
//! Debug builds, or builds with the `strict-invariants` / `check-invariants`
//! features, verify after each mutation that no edge points outside the node
//! sequence. See [`DebugInvariants`] for on-demand validation.
//!
//! ## Usage
//! ```rust
//! use directed_graph::prelude::*;
//!
//! let mut g = DirectedGraph::new();
//! for v in [11, 22, 33] {
//!     g.insert(v);
//! }
//! g.insert_edge(&11, &33);
//! g.insert_edge(&22, &33);
//! assert!(g.erase(&33));
//! assert_eq!(g.edge_count(), 0);
//! assert_eq!(to_dot(&g, "G").unwrap(), "digraph G {\n\t11\n\t22\n}\n");
//! ```

pub mod debug_invariants;
pub mod graph;
pub mod graph_error;
pub mod io;

pub use debug_invariants::DebugInvariants;
pub use graph::{DirectedGraph, GraphId, Node, NodePos};
pub use graph_error::GraphError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{DirectedGraph, Exclusive, GraphId, Iter, IterMut, NodePos, Shared};
    pub use crate::graph_error::GraphError;
    pub use crate::io::{DotWriter, GraphWriter, to_dot};
}
