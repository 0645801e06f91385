//! Immutable, validated DAG snapshots.
//!
//! [`SealedDag`] is the frozen phase of the graph lifecycle. It is produced
//! from a [`DirectedGraph`] by [`SealedDag::seal`], which validates
//! acyclicity and deep-copies the adjacency so later mutation of the builder
//! cannot reach the snapshot. The snapshot exposes the same read-only query
//! surface as the builder plus the four topological traversal factories, and
//! caches its level assignment for O(1) rank queries.

use hashbrown::{HashMap, HashSet};
use once_cell::sync::OnceCell;

use super::adjacency::AdjacencyStore;
use super::bounds::VertexLike;
use super::digraph::DirectedGraph;
use super::query::DigraphQuery;
use super::traversal::{Direction, TopoLevels, TopoOrder};
use super::validate;
use crate::error::DagError;

/// An immutable directed acyclic graph snapshot.
///
/// Safe to read from multiple traversals at once: queries return fresh
/// copies and nothing mutates the frozen adjacency.
///
/// # Example
/// ```
/// use sealed_dag::prelude::*;
///
/// let g = DirectedGraph::from_edges([("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
/// let dag = SealedDag::seal(&g)?;
/// let levels: Vec<Vec<_>> = dag.top_levels().collect();
/// assert_eq!(levels, vec![vec!["a"], vec!["b", "c"], vec!["d"]]);
/// # Ok::<(), sealed_dag::DagError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SealedDag<V: VertexLike> {
    store: AdjacencyStore<V>,
    levels: OnceCell<LevelCache<V>>,
}

/// Cached rank assignment, computed once per snapshot.
#[derive(Clone, Debug)]
struct LevelCache<V> {
    /// Longest-path distance from any source.
    level: HashMap<V, u32>,
    /// Longest-path distance down to any sink.
    depth: HashMap<V, u32>,
    level_count: usize,
}

impl<V: VertexLike> SealedDag<V> {
    /// A snapshot of the empty graph.
    pub fn empty() -> Self {
        Self {
            store: AdjacencyStore::new(),
            levels: OnceCell::new(),
        }
    }

    /// Validate `graph` and freeze it into a snapshot.
    ///
    /// # Errors
    /// [`DagError::CyclicGraph`] if `graph` contains any directed cycle
    /// (including self-loops). Nothing is returned on failure; the caller
    /// keeps the builder and may inspect or repair it.
    pub fn seal(graph: &DirectedGraph<V>) -> Result<Self, DagError> {
        if validate::has_cycle(graph) {
            return Err(DagError::CyclicGraph);
        }
        log::debug!("sealed digraph with {} vertices", graph.vertex_count());
        Ok(Self::snapshot(graph))
    }

    /// Freeze `graph` without validating acyclicity.
    ///
    /// For callers who have established acyclicity by construction and want
    /// to skip the validation pass. If the graph does contain a cycle,
    /// traversal behavior over the snapshot is unspecified: iterators may
    /// terminate early without emitting every vertex, or panic.
    pub fn seal_unchecked(graph: &DirectedGraph<V>) -> Self {
        log::debug!(
            "sealed digraph with {} vertices, validation bypassed",
            graph.vertex_count()
        );
        Self::snapshot(graph)
    }

    fn snapshot(graph: &DirectedGraph<V>) -> Self {
        Self {
            // deep copy; the snapshot shares no state with the builder
            store: graph.store().clone(),
            levels: OnceCell::new(),
        }
    }

    pub(crate) fn store(&self) -> &AdjacencyStore<V> {
        &self.store
    }

    // --- traversal factories ------------------------------------------------

    /// Fresh lazy traversal in topological order: for every edge `(u, v)`,
    /// `u` is yielded strictly before `v`.
    pub fn top_order(&self) -> TopoOrder<'_, V> {
        TopoOrder::new(self, Direction::Forward)
    }

    /// Fresh lazy traversal in reverse topological order: for every edge
    /// `(u, v)`, `v` is yielded strictly before `u`.
    pub fn reverse_top_order(&self) -> TopoOrder<'_, V> {
        TopoOrder::new(self, Direction::Reverse)
    }

    /// Fresh lazy traversal yielding one level per step, sources first.
    pub fn top_levels(&self) -> TopoLevels<'_, V> {
        TopoLevels::new(self, Direction::Forward)
    }

    /// Fresh lazy traversal yielding one level per step, sinks first.
    pub fn reverse_top_levels(&self) -> TopoLevels<'_, V> {
        TopoLevels::new(self, Direction::Reverse)
    }

    // --- cached rank queries ------------------------------------------------

    /// Longest-path distance from any source to `v`, or `None` if `v` is
    /// not in the snapshot. Sources are at level 0.
    pub fn level_of(&self, v: V) -> Option<u32> {
        self.level_cache().level.get(&v).copied()
    }

    /// Longest-path distance from `v` down to any sink, or `None` if `v`
    /// is not in the snapshot. Sinks are at depth 0.
    pub fn depth_of(&self, v: V) -> Option<u32> {
        self.level_cache().depth.get(&v).copied()
    }

    /// Length of the longest dependency chain in the snapshot; 0 for an
    /// empty or edge-free graph.
    pub fn diameter(&self) -> u32 {
        (self.level_cache().level_count as u32).saturating_sub(1)
    }

    /// Number of levels `top_levels` will yield.
    pub fn level_count(&self) -> usize {
        self.level_cache().level_count
    }

    fn level_cache(&self) -> &LevelCache<V> {
        self.levels.get_or_init(|| {
            let mut level = HashMap::with_capacity(self.store.vertex_count());
            let mut level_count = 0;
            for (rank, frontier) in self.top_levels().enumerate() {
                for v in frontier {
                    level.insert(v, rank as u32);
                }
                level_count = rank + 1;
            }
            let mut depth = HashMap::with_capacity(level.len());
            for (rank, frontier) in self.reverse_top_levels().enumerate() {
                for v in frontier {
                    depth.insert(v, rank as u32);
                }
            }
            LevelCache {
                level,
                depth,
                level_count,
            }
        })
    }
}

impl<V: VertexLike> Default for SealedDag<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: VertexLike> DigraphQuery<V> for SealedDag<V> {
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
