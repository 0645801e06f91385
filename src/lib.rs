//! # sealed-dag
//!
//! sealed-dag is a small library for building directed graphs, validating
//! them acyclic, freezing them into immutable snapshots, and traversing the
//! snapshots in topological order. Vertices are arbitrary hashable values;
//! the graph never inspects their contents.
//!
//! ## Lifecycle
//! The graph has two phases, editable and frozen, expressed as two distinct
//! types connected by a one-way validating conversion:
//! - [`DirectedGraph`](graph::DirectedGraph): the mutable builder. Add and
//!   remove vertices and edges; duplicate edges collapse to one.
//! - [`SealedDag`](graph::SealedDag): the immutable snapshot, produced by
//!   [`SealedDag::seal`](graph::SealedDag::seal). Sealing runs cycle
//!   detection and deep-copies the adjacency, so the snapshot is isolated
//!   from any later mutation of the builder.
//!
//! ## Traversal
//! A sealed snapshot hands out four lazy traversals, each fresh and
//! independent per call:
//! - [`top_order`](graph::SealedDag::top_order) /
//!   [`reverse_top_order`](graph::SealedDag::reverse_top_order): one vertex
//!   at a time, every edge's source strictly before (after) its target.
//! - [`top_levels`](graph::SealedDag::top_levels) /
//!   [`reverse_top_levels`](graph::SealedDag::reverse_top_levels): one whole
//!   frontier per step; a vertex's level is the length of the longest path
//!   from any source to it.
//!
//! ## Determinism
//! Frontiers and levels are emitted in sorted vertex order, so every
//! traversal over a given snapshot is reproducible.
//!
//! ## Example
//! ```
//! use sealed_dag::prelude::*;
//!
//! let mut g = DirectedGraph::new();
//! g.add_edge("cook", "eat");
//! g.add_edge("shop", "cook");
//! g.add_edge("eat", "wash up");
//!
//! let dag = SealedDag::seal(&g)?;
//! let order: Vec<_> = dag.top_order().collect();
//! assert_eq!(order, vec!["shop", "cook", "eat", "wash up"]);
//! # Ok::<(), sealed_dag::DagError>(())
//! ```
//!
//! This crate is single-threaded and synchronous: construction is
//! single-writer, and a sealed snapshot may be read by any number of
//! concurrent traversals because nothing mutates it.

pub mod error;
pub mod graph;

pub use error::DagError;

/// A convenient prelude importing the most-used traits and types.
pub mod prelude {
    pub use crate::error::DagError;
    pub use crate::graph::bounds::VertexLike;
    pub use crate::graph::digraph::DirectedGraph;
    pub use crate::graph::query::DigraphQuery;
    pub use crate::graph::sealed::SealedDag;
    pub use crate::graph::traversal::{TopoLevels, TopoOrder};
}
