//! Node record stored by [`DirectedGraph`](super::DirectedGraph).
//!
//! A node is a value plus the set of indices of the nodes it points to. The
//! indices are positions in the owning graph's sequence, so they are only
//! meaningful together with that graph and are renumbered whenever a node
//! before them is erased.

use std::collections::BTreeSet;

/// Ordered set of out-edge target indices.
pub type AdjacencySet = BTreeSet<usize>;

/// A stored value and its outgoing-edge index set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    adjacency: AdjacencySet,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacency: AdjacencySet::new(),
        }
    }

    /// The stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// Indices of the nodes this node points to, ascending.
    #[inline]
    pub fn adjacency(&self) -> &AdjacencySet {
        &self.adjacency
    }

    #[inline]
    pub(crate) fn adjacency_mut(&mut self) -> &mut AdjacencySet {
        &mut self.adjacency
    }

    /// Drop the edge to `erased` and shift every higher target down by one.
    ///
    /// Entries below `erased` are untouched, so the set is split there and
    /// only the upper half is rebuilt.
    pub(crate) fn unlink(&mut self, erased: usize) {
        let upper = self.adjacency.split_off(&erased);
        self.adjacency
            .extend(upper.into_iter().filter(|&i| i != erased).map(|i| i - 1));
    }
}
