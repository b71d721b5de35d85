//! Directed graph container.
//!
//! This module provides the core types of the crate:
//! - [`DirectedGraph`], a sequence of unique values linked by directed edges
//! - [`Node`], the stored value plus its out-edge index set
//! - [`NodePos`] and [`GraphId`], non-owning positions into a graph
//! - [`Values`], the node-value iterator generic over [`Shared`] and
//!   [`Exclusive`] access
//!
//! Edge targets are node indices, so erasing a node renumbers the edges of
//! every remaining node. Positions and indices obtained before a mutation
//! must not be reused after it.

pub mod directed;
pub mod iter;
pub mod node;
pub mod position;

pub use directed::DirectedGraph;
pub use iter::{Access, Exclusive, IntoValues, Iter, IterMut, Shared, Values};
pub use node::{AdjacencySet, Node};
pub use position::{GraphId, NodePos};

#[cfg(test)]
mod tests;
