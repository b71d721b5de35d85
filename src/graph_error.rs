//! GraphError: Unified error type for directed-graph public APIs
//!
//! "Not found" outcomes are reported through `bool`/`Option` returns; this
//! type covers the conditions that are genuinely reportable: checked access
//! out of range, broken invariants, and export I/O failures.

use thiserror::Error;

/// Unified error type for directed-graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Checked positional access outside `0..len`.
    #[error("index {index} out of range for graph of {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },
    /// An adjacency entry does not designate a node of the same graph.
    #[error("node {node} has edge to index {target}, but graph holds only {len} nodes")]
    DanglingIndex {
        node: usize,
        target: usize,
        len: usize,
    },
    /// Two nodes hold values that compare equal.
    #[error("nodes {first} and {second} hold equal values")]
    DuplicateValue { first: usize, second: usize },
    /// Writer failure during export.
    #[error("I/O error: {0}")]
    Io(String),
    /// Exported bytes were not valid UTF-8.
    #[error("export produced invalid UTF-8: {0}")]
    Utf8(String),
}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        GraphError::Io(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for GraphError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        GraphError::Utf8(e.to_string())
    }
}
