//! Mutable directed-graph builder.
//!
//! [`DirectedGraph`] is the editable phase of the graph lifecycle: populate
//! it with vertices and edges, then hand it to [`SealedDag::seal`] to obtain
//! an immutable, validated snapshot. It is single-writer by design; there is
//! no internal synchronization.
//!
//! [`SealedDag::seal`]: crate::graph::sealed::SealedDag::seal

use hashbrown::HashSet;
use itertools::Itertools;

use super::adjacency::AdjacencyStore;
use super::bounds::VertexLike;
use super::query::DigraphQuery;
use crate::error::DagError;

/// A mutable directed graph over vertices of type `V`.
///
/// Duplicate edges collapse to one; all mutators are idempotent or no-ops
/// when their target is absent.
///
/// # Example
/// ```
/// use sealed_dag::prelude::*;
///
/// let mut g = DirectedGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("b", "c");
/// assert!(g.has_edge("a", "b"));
/// assert_eq!(g.vertex_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DirectedGraph<V: VertexLike> {
    store: AdjacencyStore<V>,
}

impl<V: VertexLike> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexLike> DirectedGraph<V> {
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self {
            store: AdjacencyStore::new(),
        }
    }

    /// Build a graph from an iterator of `(src, dst)` edges.
    ///
    /// # Example
    /// ```
    /// use sealed_dag::prelude::*;
    ///
    /// let g = DirectedGraph::from_edges([(1, 2), (1, 3)]);
    /// assert_eq!(g.child_count(1).unwrap(), 2);
    /// ```
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut g = Self::new();
        for (src, dst) in edges {
            g.add_edge(src, dst);
        }
        g
    }

    /// Add `v` to the graph. Does nothing if `v` is already present.
    pub fn add_vertex(&mut self, v: V) {
        self.store.insert_vertex(v);
    }

    /// Add the edge `src → dst`, adding either endpoint first if absent.
    pub fn add_edge(&mut self, src: V, dst: V) {
        self.store.insert_edge(src, dst);
    }

    /// Remove the edge `src → dst`. No-op if it is absent.
    pub fn remove_edge(&mut self, src: V, dst: V) {
        self.store.remove_edge(src, dst);
    }

    /// Remove `v` and all of its incident edges. No-op if `v` is absent.
    pub fn remove_vertex(&mut self, v: V) {
        self.store.remove_vertex(v);
    }

    pub(crate) fn store(&self) -> &AdjacencyStore<V> {
        &self.store
    }
}

impl<V: VertexLike> DigraphQuery<V> for DirectedGraph<V> {
    fn has_vertex(&self, v: V) -> bool {
        self.store.has_vertex(v)
    }
    fn has_edge(&self, src: V, dst: V) -> bool {
        self.store.has_edge(src, dst)
    }
    fn vertex_set(&self) -> HashSet<V> {
        self.store.vertex_set()
    }
    fn parents(&self, v: V) -> HashSet<V> {
        self.store.parents_of(v)
    }
    fn children(&self, v: V) -> HashSet<V> {
        self.store.children_of(v)
    }
    fn parent_count(&self, v: V) -> Result<usize, DagError> {
        self.store.parent_count(v)
    }
    fn child_count(&self, v: V) -> Result<usize, DagError> {
        self.store.child_count(v)
    }
    fn sources(&self) -> HashSet<V> {
        self.store.sources()
    }
    fn sinks(&self) -> HashSet<V> {
        self.store.sinks()
    }
    fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }
}

impl<V: VertexLike> std::fmt::Display for DirectedGraph<V> {
    /// One `src -> dst` line per edge, sorted for stable output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (src, dst) in self.store.edges().sorted() {
            writeln!(f, "{src:?} -> {dst:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod digraph_tests {
    use super::DirectedGraph;
    use crate::graph::query::DigraphQuery;

    #[test]
    fn from_edges_matches_explicit_building() {
        let bulk = DirectedGraph::from_edges([(1, 2), (2, 3), (1, 3)]);
        let mut manual = DirectedGraph::new();
        manual.add_edge(1, 2);
        manual.add_edge(2, 3);
        manual.add_edge(1, 3);
        assert_eq!(bulk.vertex_set(), manual.vertex_set());
        assert_eq!(bulk.children(1), manual.children(1));
        assert_eq!(bulk.parents(3), manual.parents(3));
    }

    #[test]
    fn add_edge_twice_is_one_edge() {
        let mut g = DirectedGraph::new();
        g.add_edge("a", "b");
        g.add_edge("a", "b");
        assert_eq!(g.child_count("a").unwrap(), 1);
        assert_eq!(g.parent_count("b").unwrap(), 1);
    }

    #[test]
    fn isolated_vertex_is_source_and_sink() {
        let mut g = DirectedGraph::new();
        g.add_vertex(42);
        assert!(g.sources().contains(&42));
        assert!(g.sinks().contains(&42));
    }

    #[test]
    fn display_lists_edges() {
        let g = DirectedGraph::from_edges([(1, 2), (2, 3)]);
        let rendered = g.to_string();
        assert_eq!(rendered, "1 -> 2\n2 -> 3\n");
    }

    #[test]
    fn queries_on_absent_vertices() {
        let g = DirectedGraph::<u32>::new();
        assert!(!g.has_vertex(1));
        assert!(!g.has_edge(1, 2));
        assert!(g.parents(1).is_empty());
        assert!(g.children(1).is_empty());
        assert!(g.is_empty());
    }
}
