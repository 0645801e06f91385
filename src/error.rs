//! DagError: unified error type for the sealed-dag public APIs.
//!
//! Every fallible operation in this crate reports through [`DagError`] so
//! callers handle one error enum regardless of which layer failed.

use thiserror::Error;

/// Unified error type for graph construction and sealing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DagError {
    /// A degree query named a vertex that is not in the graph.
    ///
    /// This is a programming error on the caller's side; the offending vertex
    /// is captured in `Debug` form.
    #[error("vertex {0} does not exist in this graph")]
    UnknownVertex(String),
    /// Sealing was requested for a graph that contains a cycle.
    #[error("cannot seal a cyclic graph into a DAG")]
    CyclicGraph,
}
