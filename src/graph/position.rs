//! Non-owning node positions.
//!
//! A [`NodePos`] is an index into a graph's node sequence tagged with the
//! [`GraphId`] of that graph. It never borrows the graph: values are reached
//! through [`DirectedGraph::get_at`](super::DirectedGraph::get_at), which
//! returns `None` for the end position or for a position taken from another
//! graph.
//!
//! Positions follow the usual sequence-container invalidation rules: any
//! insert, erase, clear or swap on the graph invalidates them. A stale
//! position is still memory safe to use, it simply designates whatever node
//! now sits at that index.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a graph instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn fresh() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Raw id value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A bidirectional position in a graph's node sequence.
///
/// Two positions are equal iff they belong to the same graph and hold the
/// same index. Positions of different graphs are unordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodePos {
    graph: GraphId,
    index: usize,
}

impl NodePos {
    #[inline]
    pub(crate) const fn new(graph: GraphId, index: usize) -> Self {
        Self { graph, index }
    }

    /// Index into the node sequence.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Identity of the graph this position was taken from.
    #[inline]
    pub const fn graph(self) -> GraphId {
        self.graph
    }

    /// The following position. Advancing past the end is the caller's
    /// responsibility to avoid; the result simply never resolves.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.graph, self.index.saturating_add(1))
    }

    /// The preceding position, or `None` at the first element.
    #[inline]
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index.checked_sub(1).map(|i| Self::new(self.graph, i))
    }
}

impl PartialOrd for NodePos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.graph == other.graph).then(|| self.index.cmp(&other.index))
    }
}
