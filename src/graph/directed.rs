//! [`DirectedGraph`]: a sequence container of unique values with directed
//! edges between them.
//!
//! Edges are stored per node as indices into the node sequence
//! (position-as-identity). Appending a node never disturbs existing indices;
//! erasing the node at index `k` runs one re-indexing pass over every node,
//! removing edges into `k` and shifting every target above `k` down by one.
//! All removal paths (`erase`, `erase_at`, `erase_range`) go through that
//! single pass.

use std::collections::BTreeSet;
use std::ops::{Index, IndexMut};

use super::iter::{IntoValues, Iter, IterMut};
use super::node::Node;
use super::position::{GraphId, NodePos};
use crate::debug_invariants::{self, DebugInvariants};
use crate::graph_error::GraphError;

/// Directed graph over unique values of type `T`.
///
/// Behaves like a sequence of `T` (indexing, iteration, `len`) whose elements
/// can be linked by directed edges. Uniqueness of values is enforced by
/// [`insert`](Self::insert) only; mutating a value in place through
/// [`IndexMut`], [`get_mut`](Self::get_mut) or [`iter_mut`](Self::iter_mut)
/// must not make it equal to another stored value.
///
/// # Example
/// ```rust
/// use directed_graph::DirectedGraph;
/// let mut g = DirectedGraph::new();
/// g.insert(1);
/// g.insert(2);
/// assert!(g.insert_edge(&1, &2));
/// assert!(!g.insert_edge(&1, &2));
/// assert_eq!(g.adjacent_values(&1).into_iter().collect::<Vec<_>>(), vec![&2]);
/// ```
#[derive(Debug)]
pub struct DirectedGraph<T> {
    nodes: Vec<Node<T>>,
    id: GraphId,
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            id: GraphId::fresh(),
        }
    }
}

impl<T: Clone> Clone for DirectedGraph<T> {
    /// The clone is a distinct graph: positions taken from `self` do not
    /// resolve against it.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            id: GraphId::fresh(),
        }
    }
}

impl<T> DirectedGraph<T> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            id: GraphId::fresh(),
        }
    }

    /// Identity recorded in every position taken from this graph.
    #[inline]
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Upper bound on the number of nodes the backing storage can address.
    #[inline]
    pub fn max_size(&self) -> usize {
        isize::MAX as usize / std::mem::size_of::<Node<T>>().max(1)
    }

    /// Total number of edges over all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.adjacency().len()).sum()
    }

    /// Removes all nodes. Nothing remains to reference, so no re-indexing.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Exchanges the node sequences of `self` and `other`.
    ///
    /// Only the backing vectors are swapped; no value is copied or moved.
    /// Each graph keeps its own id, so every outstanding position of either
    /// graph is invalidated.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.nodes, &mut other.nodes);
    }

    /// Position of the first node (equal to [`end`](Self::end) when empty).
    #[inline]
    pub fn begin(&self) -> NodePos {
        NodePos::new(self.id, 0)
    }

    /// One-past-the-last position.
    #[inline]
    pub fn end(&self) -> NodePos {
        NodePos::new(self.id, self.nodes.len())
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.nodes.get(index).map(Node::value)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.nodes.get_mut(index).map(Node::value_mut)
    }

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<&T, GraphError> {
        let len = self.nodes.len();
        self.get(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GraphError> {
        let len = self.nodes.len();
        self.get_mut(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Resolves a position to its value.
    ///
    /// Returns `None` for the end position and for positions taken from a
    /// different graph.
    pub fn get_at(&self, pos: NodePos) -> Option<&T> {
        if pos.graph() != self.id {
            return None;
        }
        self.get(pos.index())
    }

    /// Mutable counterpart of [`get_at`](Self::get_at).
    pub fn get_at_mut(&mut self, pos: NodePos) -> Option<&mut T> {
        if pos.graph() != self.id {
            return None;
        }
        self.get_mut(pos.index())
    }

    /// Node record at `index`, exposing its raw adjacency indices.
    #[inline]
    pub fn node(&self, index: usize) -> Option<&Node<T>> {
        self.nodes.get(index)
    }

    /// All node records in sequence order.
    #[inline]
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.nodes.iter(), self.id)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.nodes.iter_mut(), self.id)
    }

    /// Erases the node at `pos`.
    ///
    /// Returns the position now occupied by the following node. Erasing the
    /// end position, or a position of another graph, is a no-op returning
    /// [`end`](Self::end).
    pub fn erase_at(&mut self, pos: NodePos) -> NodePos {
        if pos.graph() != self.id || pos.index() >= self.nodes.len() {
            if pos.graph() != self.id {
                log::debug!("erase_at: position from graph {:?} ignored", pos.graph());
            }
            return self.end();
        }
        self.remove_node(pos.index());
        NodePos::new(self.id, pos.index())
    }

    /// Erases every node in `first..last`, one at a time from the front.
    ///
    /// Each erase runs its own re-indexing pass, so the outcome is the same
    /// as calling [`erase_at`](Self::erase_at) repeatedly with `first`.
    /// `last` is clamped to the end; an empty or reversed range erases
    /// nothing. Returns the position following the erased run.
    pub fn erase_range(&mut self, first: NodePos, last: NodePos) -> NodePos {
        if first.graph() != self.id || last.graph() != self.id {
            log::debug!("erase_range: positions from another graph ignored");
            return self.end();
        }
        let start = first.index().min(self.nodes.len());
        let stop = last.index().min(self.nodes.len());
        if start < stop {
            log::trace!("erase_range: removing nodes {start}..{stop}");
            for _ in start..stop {
                self.remove_node(start);
            }
        }
        NodePos::new(self.id, start)
    }

    /// Removes the node at `index` after renumbering every edge.
    fn remove_node(&mut self, index: usize) -> Node<T> {
        self.unlink_index(index);
        let node = self.nodes.remove(index);
        crate::debug_invariants!(self.validate_adjacency(), "remove_node");
        node
    }

    /// The re-indexing pass: every node drops its edge to `erased` and
    /// shifts targets above `erased` down by one.
    fn unlink_index(&mut self, erased: usize) {
        log::trace!(
            "unlink_index: renumbering {} nodes around index {erased}",
            self.nodes.len()
        );
        for node in &mut self.nodes {
            node.unlink(erased);
        }
    }

    /// Checks that every adjacency entry designates an existing node.
    pub(crate) fn validate_adjacency(&self) -> Result<(), GraphError> {
        debug_invariants::check_adjacency(&self.nodes)
    }
}

impl<T: PartialEq> DirectedGraph<T> {
    /// Index of the node holding `value`, by linear scan.
    pub fn position_of(&self, value: &T) -> Option<usize> {
        self.nodes.iter().position(|n| n.value() == value)
    }

    /// Position of the node holding `value`.
    pub fn find(&self, value: &T) -> Option<NodePos> {
        self.position_of(value).map(|i| NodePos::new(self.id, i))
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.position_of(value).is_some()
    }

    /// Inserts `value` as a new node unless an equal value is present.
    ///
    /// Returns the position of the node holding the value and whether it was
    /// newly inserted. A new node is appended, so its index is the previous
    /// length. Lookup is a linear scan; no auxiliary index is kept.
    ///
    /// # Example
    /// ```rust
    /// use directed_graph::DirectedGraph;
    /// let mut g = DirectedGraph::new();
    /// let (a, fresh) = g.insert("a");
    /// assert!(fresh);
    /// let (again, fresh) = g.insert("a");
    /// assert!(!fresh);
    /// assert_eq!(a, again);
    /// assert_eq!(g.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> (NodePos, bool) {
        if let Some(pos) = self.find(&value) {
            return (pos, false);
        }
        let index = self.nodes.len();
        self.nodes.push(Node::new(value));
        (NodePos::new(self.id, index), true)
    }

    /// Erases the node holding `value` and every edge into it.
    ///
    /// Returns `false`, without side effects, when `value` is absent.
    pub fn erase(&mut self, value: &T) -> bool {
        match self.position_of(value) {
            Some(index) => {
                self.remove_node(index);
                true
            }
            None => {
                log::debug!("erase: value not present");
                false
            }
        }
    }

    /// Adds the edge `from -> to`.
    ///
    /// Returns `true` only if both endpoints exist and the edge is new.
    pub fn insert_edge(&mut self, from: &T, to: &T) -> bool {
        let Some((from, to)) = self.endpoints(from, to) else {
            log::debug!("insert_edge: endpoint not present");
            return false;
        };
        let inserted = self.nodes[from].adjacency_mut().insert(to);
        crate::debug_invariants!(self.validate_adjacency(), "insert_edge");
        inserted
    }

    /// Removes the edge `from -> to`.
    ///
    /// Returns `false` without touching any adjacency set when either
    /// endpoint is absent or the edge does not exist.
    pub fn erase_edge(&mut self, from: &T, to: &T) -> bool {
        let Some((from, to)) = self.endpoints(from, to) else {
            log::debug!("erase_edge: endpoint not present");
            return false;
        };
        self.nodes[from].adjacency_mut().remove(&to)
    }

    /// Whether the edge `from -> to` exists.
    pub fn contains_edge(&self, from: &T, to: &T) -> bool {
        self.endpoints(from, to)
            .is_some_and(|(from, to)| self.nodes[from].adjacency().contains(&to))
    }

    /// Number of out-edges of `value`'s node, `0` when absent.
    pub fn out_degree(&self, value: &T) -> usize {
        self.position_of(value)
            .map_or(0, |i| self.nodes[i].adjacency().len())
    }

    fn endpoints(&self, from: &T, to: &T) -> Option<(usize, usize)> {
        Some((self.position_of(from)?, self.position_of(to)?))
    }

    /// Whether `self` and `rhs` hold nodes for equal values with equal
    /// value-level targets.
    fn same_adjacency(&self, ours: &Node<T>, rhs: &Self, theirs: &Node<T>) -> bool {
        ours.adjacency().len() == theirs.adjacency().len()
            && ours.adjacency().iter().all(|&target| {
                rhs.position_of(self.nodes[target].value())
                    .is_some_and(|mapped| theirs.adjacency().contains(&mapped))
            })
    }
}

impl<T: Ord> DirectedGraph<T> {
    /// Values pointed to by `value`'s node, in ascending order.
    ///
    /// Empty when `value` is absent.
    pub fn adjacent_values(&self, value: &T) -> BTreeSet<&T> {
        self.position_of(value)
            .map(|i| self.adjacent_values_at(i))
            .unwrap_or_default()
    }

    /// Values pointed to by the node at `index`, in ascending order.
    ///
    /// Empty when `index` is out of range.
    pub fn adjacent_values_at(&self, index: usize) -> BTreeSet<&T> {
        self.nodes
            .get(index)
            .map(|node| {
                node.adjacency()
                    .iter()
                    .filter_map(|&target| self.get(target))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Graphs are equal when they hold the same values, in any order, and every
/// value points to the same set of values in both.
///
/// Raw indices are never compared: they depend on insertion order.
impl<T: PartialEq> PartialEq for DirectedGraph<T> {
    fn eq(&self, rhs: &Self) -> bool {
        if self.nodes.len() != rhs.nodes.len() {
            return false;
        }
        self.nodes.iter().all(|ours| {
            rhs.position_of(ours.value())
                .is_some_and(|j| self.same_adjacency(ours, rhs, &rhs.nodes[j]))
        })
    }
}

impl<T: Eq> Eq for DirectedGraph<T> {}

/// Unchecked access; panics when `index >= len`.
impl<T> Index<usize> for DirectedGraph<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.nodes[index].value()
    }
}

impl<T> IndexMut<usize> for DirectedGraph<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.nodes[index].value_mut()
    }
}

impl<T: PartialEq> Extend<T> for DirectedGraph<T> {
    /// Inserts every value; duplicates are skipped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for DirectedGraph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}

impl<T> IntoIterator for DirectedGraph<T> {
    type Item = T;
    type IntoIter = IntoValues<T>;

    fn into_iter(self) -> IntoValues<T> {
        IntoValues::new(self.nodes)
    }
}

impl<'a, T> IntoIterator for &'a DirectedGraph<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DirectedGraph<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> DebugInvariants for DirectedGraph<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "DirectedGraph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        self.validate_adjacency()?;
        debug_invariants::check_unique_values(&self.nodes)
    }
}
