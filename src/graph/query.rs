//! Read-only query surface shared by mutable and sealed graphs.
//!
//! [`DigraphQuery`] is the seam between the builder ([`DirectedGraph`]) and
//! the snapshot ([`SealedDag`]): both expose the same queries, and the cycle
//! validator is written against this trait rather than either concrete type.
//!
//! All set-returning queries hand back fresh owned sets. Callers can mutate
//! the result freely without touching the graph's internal adjacency state.
//!
//! [`DirectedGraph`]: crate::graph::digraph::DirectedGraph
//! [`SealedDag`]: crate::graph::sealed::SealedDag

use hashbrown::HashSet;
use itertools::Itertools;

use super::bounds::VertexLike;
use crate::error::DagError;

/// Read-only queries over a directed graph with mirrored adjacency.
pub trait DigraphQuery<V: VertexLike> {
    /// Whether `v` is in the graph.
    fn has_vertex(&self, v: V) -> bool;

    /// Whether the edge `src → dst` is in the graph.
    fn has_edge(&self, src: V, dst: V) -> bool;

    /// Every vertex in the graph, as a fresh set.
    fn vertex_set(&self) -> HashSet<V>;

    /// The parents of `v` (empty if `v` is absent), as a fresh set.
    fn parents(&self, v: V) -> HashSet<V>;

    /// The children of `v` (empty if `v` is absent), as a fresh set.
    fn children(&self, v: V) -> HashSet<V>;

    /// Number of parents of `v`.
    ///
    /// # Errors
    /// [`DagError::UnknownVertex`] if `v` is not in the graph.
    fn parent_count(&self, v: V) -> Result<usize, DagError>;

    /// Number of children of `v`.
    ///
    /// # Errors
    /// [`DagError::UnknownVertex`] if `v` is not in the graph.
    fn child_count(&self, v: V) -> Result<usize, DagError>;

    /// Vertices with no parents, as a fresh set.
    fn sources(&self) -> HashSet<V>;

    /// Vertices with no children, as a fresh set.
    fn sinks(&self) -> HashSet<V>;

    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Whether the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Every vertex in ascending order. Deterministic listing for tests
    /// and diagnostics.
    fn vertices_sorted(&self) -> Vec<V> {
        self.vertex_set().into_iter().sorted().collect()
    }
}
