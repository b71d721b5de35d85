//! Invariant checks for the graph container.
//!
//! Two invariants hold for every graph between public calls: every adjacency
//! entry is a valid index into the node sequence, and no two nodes hold equal
//! values. The adjacency check is cheap enough to run after each mutation in
//! checked builds; the uniqueness check is quadratic and only runs through
//! [`DebugInvariants::validate_invariants`].

use itertools::Itertools;

use crate::graph::Node;
use crate::graph_error::GraphError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), GraphError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// First adjacency entry that does not index into `nodes`.
pub fn check_adjacency<T>(nodes: &[Node<T>]) -> Result<(), GraphError> {
    let len = nodes.len();
    for (node, n) in nodes.iter().enumerate() {
        // Sets are ordered, so the last entry is the only candidate.
        if let Some(&target) = n.adjacency().last() {
            if target >= len {
                return Err(GraphError::DanglingIndex { node, target, len });
            }
        }
    }
    Ok(())
}

/// First pair of nodes holding equal values.
pub fn check_unique_values<T: PartialEq>(nodes: &[Node<T>]) -> Result<(), GraphError> {
    match nodes
        .iter()
        .enumerate()
        .tuple_combinations()
        .find(|((_, a), (_, b))| a.value() == b.value())
    {
        Some(((first, _), (second, _))) => Err(GraphError::DuplicateValue { first, second }),
        None => Ok(()),
    }
}
