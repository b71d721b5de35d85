//! Node-value iterators.
//!
//! [`Values`] adapts iteration over the node sequence into iteration over the
//! stored values. The shared and exclusive variants are the same type
//! parameterized by an [`Access`] marker, so advancing, receding and position
//! tracking are written once.

use std::fmt;
use std::iter::FusedIterator;

use super::node::Node;
use super::position::{GraphId, NodePos};

mod sealed {
    pub trait Sealed {}
}

/// Access mode of a [`Values`] iterator.
///
/// Implemented only by [`Shared`] and [`Exclusive`].
pub trait Access<'a, T: 'a>: sealed::Sealed {
    /// Underlying iterator over node slots.
    type Slots: DoubleEndedIterator + ExactSizeIterator + FusedIterator;
    /// Reference type yielded for each value.
    type Item;

    fn project(slot: <Self::Slots as Iterator>::Item) -> Self::Item;
}

/// Read-only access: yields `&T`.
#[derive(Debug)]
pub enum Shared {}

/// Mutable access: yields `&mut T`.
#[derive(Debug)]
pub enum Exclusive {}

impl sealed::Sealed for Shared {}
impl sealed::Sealed for Exclusive {}

impl<'a, T: 'a> Access<'a, T> for Shared {
    type Slots = std::slice::Iter<'a, Node<T>>;
    type Item = &'a T;

    #[inline]
    fn project(slot: &'a Node<T>) -> &'a T {
        slot.value()
    }
}

impl<'a, T: 'a> Access<'a, T> for Exclusive {
    type Slots = std::slice::IterMut<'a, Node<T>>;
    type Item = &'a mut T;

    #[inline]
    fn project(slot: &'a mut Node<T>) -> &'a mut T {
        slot.value_mut()
    }
}

/// Bidirectional iterator over node values in sequence order.
pub struct Values<'a, T: 'a, A: Access<'a, T>> {
    slots: A::Slots,
    graph: GraphId,
    front: usize,
    back: usize,
}

/// Iterator yielding `&T`.
pub type Iter<'a, T> = Values<'a, T, Shared>;
/// Iterator yielding `&mut T`.
pub type IterMut<'a, T> = Values<'a, T, Exclusive>;

impl<'a, T: 'a, A: Access<'a, T>> Values<'a, T, A> {
    pub(crate) fn new(slots: A::Slots, graph: GraphId) -> Self {
        let back = slots.len();
        Self {
            slots,
            graph,
            front: 0,
            back,
        }
    }

    /// Position of the element the next call to `next` yields; the end
    /// position once the front has met the back.
    #[inline]
    pub fn position(&self) -> NodePos {
        NodePos::new(self.graph, self.front)
    }

    /// Position one past the element the next call to `next_back` yields.
    #[inline]
    pub fn back_position(&self) -> NodePos {
        NodePos::new(self.graph, self.back)
    }
}

impl<'a, T: 'a, A: Access<'a, T>> Iterator for Values<'a, T, A> {
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.next()?;
        self.front += 1;
        Some(A::project(slot))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T: 'a, A: Access<'a, T>> DoubleEndedIterator for Values<'a, T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.slots.next_back()?;
        self.back -= 1;
        Some(A::project(slot))
    }
}

impl<'a, T: 'a, A: Access<'a, T>> ExactSizeIterator for Values<'a, T, A> {}

impl<'a, T: 'a, A: Access<'a, T>> FusedIterator for Values<'a, T, A> {}

impl<'a, T: 'a> Clone for Values<'a, T, Shared> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            graph: self.graph,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T: 'a, A: Access<'a, T>> fmt::Debug for Values<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values")
            .field("graph", &self.graph)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// Owning iterator over node values, produced by consuming a graph.
#[derive(Debug)]
pub struct IntoValues<T> {
    nodes: std::vec::IntoIter<Node<T>>,
}

impl<T> IntoValues<T> {
    pub(crate) fn new(nodes: Vec<Node<T>>) -> Self {
        Self {
            nodes: nodes.into_iter(),
        }
    }
}

impl<T> Iterator for IntoValues<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.nodes.next().map(Node::into_value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoValues<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.nodes.next_back().map(Node::into_value)
    }
}

impl<T> ExactSizeIterator for IntoValues<T> {}

impl<T> FusedIterator for IntoValues<T> {}
