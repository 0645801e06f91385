//! Core graph types: mutable builder, sealed snapshot, and traversal.
//!
//! The lifecycle is a one-way pipeline: populate a
//! [`DirectedGraph`](digraph::DirectedGraph), seal it into a
//! [`SealedDag`](sealed::SealedDag) (validating acyclicity), then traverse
//! the frozen snapshot in topological order or level by level.

pub mod bounds;
pub mod digraph;
pub mod query;
pub mod sealed;
pub mod traversal;

mod adjacency;
mod validate;

pub use bounds::VertexLike;
pub use digraph::DirectedGraph;
pub use query::DigraphQuery;
pub use sealed::SealedDag;
pub use traversal::{TopoLevels, TopoOrder};
