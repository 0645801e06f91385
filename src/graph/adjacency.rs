//! Mirrored adjacency bookkeeping shared by the builder and the snapshot.
//!
//! [`AdjacencyStore`] keeps two mappings, `parents` and `children`, that are
//! always mutually consistent: `v ∈ children(u)` iff `u ∈ parents(v)`. The
//! source and sink sets are maintained incrementally on every mutation, never
//! recomputed on query.

use hashbrown::{HashMap, HashSet};

use super::bounds::VertexLike;
use crate::error::DagError;

/// Bidirectional adjacency plus derived source/sink sets.
///
/// Edge multiplicity is not tracked: inserting an edge twice is a no-op
/// after the first insertion.
#[derive(Clone, Debug)]
pub(crate) struct AdjacencyStore<V: VertexLike> {
    parents: HashMap<V, HashSet<V>>,
    children: HashMap<V, HashSet<V>>,
    sources: HashSet<V>,
    sinks: HashSet<V>,
}

impl<V: VertexLike> Default for AdjacencyStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexLike> AdjacencyStore<V> {
    pub(crate) fn new() -> Self {
        Self {
            parents: HashMap::new(),
            children: HashMap::new(),
            sources: HashSet::new(),
            sinks: HashSet::new(),
        }
    }

    /// Insert `v` with empty adjacency in both roles. Idempotent.
    pub(crate) fn insert_vertex(&mut self, v: V) {
        if self.parents.contains_key(&v) {
            return;
        }
        self.parents.insert(v, HashSet::new());
        self.children.insert(v, HashSet::new());
        self.sources.insert(v);
        self.sinks.insert(v);

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    /// Insert the edge `src → dst`, inserting either endpoint first if absent.
    pub(crate) fn insert_edge(&mut self, src: V, dst: V) {
        self.insert_vertex(src);
        self.insert_vertex(dst);
        self.parents.entry(dst).or_default().insert(src);
        self.children.entry(src).or_default().insert(dst);

        // dst now has a parent, src now has a child
        self.sources.remove(&dst);
        self.sinks.remove(&src);

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    /// Remove the edge `src → dst`. No-op if the edge (or either endpoint)
    /// is absent. Endpoints left without parents or children re-enter the
    /// source/sink sets.
    pub(crate) fn remove_edge(&mut self, src: V, dst: V) {
        if let Some(ps) = self.parents.get_mut(&dst) {
            ps.remove(&src);
        }
        if let Some(cs) = self.children.get_mut(&src) {
            cs.remove(&dst);
        }
        for v in [src, dst] {
            if self.parents.get(&v).is_some_and(|s| s.is_empty()) {
                self.sources.insert(v);
            }
            if self.children.get(&v).is_some_and(|s| s.is_empty()) {
                self.sinks.insert(v);
            }
        }

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    /// Remove `v` and all incident edges, scrubbing `v` out of every former
    /// neighbor's opposite adjacency set so the mirror invariant holds.
    pub(crate) fn remove_vertex(&mut self, v: V) {
        if let Some(ps) = self.parents.remove(&v) {
            for p in ps {
                if let Some(cs) = self.children.get_mut(&p) {
                    cs.remove(&v);
                    if cs.is_empty() {
                        self.sinks.insert(p);
                    }
                }
            }
        }
        if let Some(cs) = self.children.remove(&v) {
            for c in cs {
                if let Some(ps) = self.parents.get_mut(&c) {
                    ps.remove(&v);
                    if ps.is_empty() {
                        self.sources.insert(c);
                    }
                }
            }
        }
        self.sources.remove(&v);
        self.sinks.remove(&v);

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    // --- queries ------------------------------------------------------------

    #[inline]
    pub(crate) fn has_vertex(&self, v: V) -> bool {
        self.parents.contains_key(&v)
    }

    #[inline]
    pub(crate) fn has_edge(&self, src: V, dst: V) -> bool {
        self.children.get(&src).is_some_and(|cs| cs.contains(&dst))
    }

    pub(crate) fn vertex_set(&self) -> HashSet<V> {
        self.parents.keys().copied().collect()
    }

    #[inline]
    pub(crate) fn vertex_count(&self) -> usize {
        self.parents.len()
    }

    pub(crate) fn parents_of(&self, v: V) -> HashSet<V> {
        self.parents.get(&v).cloned().unwrap_or_default()
    }

    pub(crate) fn children_of(&self, v: V) -> HashSet<V> {
        self.children.get(&v).cloned().unwrap_or_default()
    }

    /// Borrowed view of the parent set, for clone-free internal traversal.
    #[inline]
    pub(crate) fn parents_ref(&self, v: V) -> Option<&HashSet<V>> {
        self.parents.get(&v)
    }

    /// Borrowed view of the child set, for clone-free internal traversal.
    #[inline]
    pub(crate) fn children_ref(&self, v: V) -> Option<&HashSet<V>> {
        self.children.get(&v)
    }

    pub(crate) fn parent_count(&self, v: V) -> Result<usize, DagError> {
        self.parents
            .get(&v)
            .map(HashSet::len)
            .ok_or_else(|| DagError::UnknownVertex(format!("{v:?}")))
    }

    pub(crate) fn child_count(&self, v: V) -> Result<usize, DagError> {
        self.children
            .get(&v)
            .map(HashSet::len)
            .ok_or_else(|| DagError::UnknownVertex(format!("{v:?}")))
    }

    /// In-degree with absent vertices treated as 0.
    #[inline]
    pub(crate) fn in_degree(&self, v: V) -> usize {
        self.parents.get(&v).map_or(0, HashSet::len)
    }

    /// Out-degree with absent vertices treated as 0.
    #[inline]
    pub(crate) fn out_degree(&self, v: V) -> usize {
        self.children.get(&v).map_or(0, HashSet::len)
    }

    pub(crate) fn sources(&self) -> HashSet<V> {
        self.sources.clone()
    }

    pub(crate) fn sinks(&self) -> HashSet<V> {
        self.sinks.clone()
    }

    /// Iterate over edges as `(src, dst)` pairs, in arbitrary order.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.children
            .iter()
            .flat_map(|(&src, cs)| cs.iter().map(move |&dst| (src, dst)))
    }

    #[cfg(debug_assertions)]
    pub(crate) fn debug_assert_consistent(&self) {
        debug_assert_eq!(
            self.parents.len(),
            self.children.len(),
            "vertex present in one adjacency map but not the other"
        );
        for (dst, ps) in &self.parents {
            for src in ps {
                let ok = self
                    .children
                    .get(src)
                    .is_some_and(|cs| cs.contains(dst));
                debug_assert!(ok, "missing mirror child[{src:?}] for edge ({src:?} -> {dst:?})");
            }
        }
        for (src, cs) in &self.children {
            for dst in cs {
                let ok = self
                    .parents
                    .get(dst)
                    .is_some_and(|ps| ps.contains(src));
                debug_assert!(ok, "missing mirror parent[{dst:?}] for edge ({src:?} -> {dst:?})");
            }
        }
        for (v, ps) in &self.parents {
            debug_assert_eq!(
                ps.is_empty(),
                self.sources.contains(v),
                "source set out of sync for {v:?}"
            );
        }
        for (v, cs) in &self.children {
            debug_assert_eq!(
                cs.is_empty(),
                self.sinks.contains(v),
                "sink set out of sync for {v:?}"
            );
        }
    }
}
