//! Lazy topological traversal of a sealed DAG.
//!
//! One frontier state machine drives both public iterators: [`TopoOrder`]
//! consumes it vertex-by-vertex, [`TopoLevels`] one whole frontier per step.
//! A frontier is the set of vertices whose predecessors (successors, in
//! reverse mode) have all been emitted; the machine keeps one count of
//! unsatisfied predecessors per encountered vertex, seeded lazily from the
//! snapshot's degree counts, and promotes a vertex into the next frontier
//! the moment its count reaches zero.
//!
//! Traversals are fresh on every factory call and never mutate the snapshot.
//! Consumption drives computation: each `next` does work proportional to the
//! out-degree of what it emits, and the whole walk is O(V + E). Frontiers
//! are emitted in sorted vertex order, so traversal is fully deterministic.

use hashbrown::{HashMap, HashSet};

use super::bounds::VertexLike;
use super::sealed::SealedDag;

/// Traversal direction over the sealed snapshot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    /// Sources first; every edge's source precedes its target.
    Forward,
    /// Sinks first; every edge's target precedes its source.
    Reverse,
}

/// Shared frontier propagation state.
struct FrontierState<'a, V: VertexLike> {
    dag: &'a SealedDag<V>,
    dir: Direction,
    /// Unsatisfied predecessor count per vertex, seeded on first encounter.
    pending: HashMap<V, usize>,
    visited: HashSet<V>,
    current: Vec<V>,
    pos: usize,
    next: Vec<V>,
}

impl<'a, V: VertexLike> FrontierState<'a, V> {
    fn new(dag: &'a SealedDag<V>, dir: Direction) -> Self {
        let roots = match dir {
            Direction::Forward => dag.store().sources(),
            Direction::Reverse => dag.store().sinks(),
        };
        let mut current: Vec<V> = roots.into_iter().collect();
        current.sort_unstable();
        Self {
            dag,
            dir,
            pending: HashMap::new(),
            visited: HashSet::new(),
            current,
            pos: 0,
            next: Vec::new(),
        }
    }

    /// Emit bookkeeping for `v`: mark it visited and release its successors.
    ///
    /// # Panics
    /// Panics if `v` was already emitted in this traversal. On a snapshot
    /// produced by [`SealedDag::seal`] this cannot happen; it guards against
    /// snapshots corrupted through [`SealedDag::seal_unchecked`].
    fn visit(&mut self, v: V) {
        assert!(
            self.visited.insert(v),
            "vertex {v:?} emitted twice while traversing a sealed DAG; \
             the snapshot contains a cycle"
        );
        let successors = match self.dir {
            Direction::Forward => self.dag.store().children_ref(v),
            Direction::Reverse => self.dag.store().parents_ref(v),
        };
        let Some(successors) = successors else {
            return;
        };
        for &s in successors {
            let remaining = match self.pending.get(&s) {
                Some(&n) => n.saturating_sub(1),
                None => self.seed_count(s).saturating_sub(1),
            };
            self.pending.insert(s, remaining);
            if remaining == 0 {
                self.next.push(s);
            }
        }
    }

    /// Initial unsatisfied-predecessor count for a newly encountered vertex.
    #[inline]
    fn seed_count(&self, v: V) -> usize {
        match self.dir {
            Direction::Forward => self.dag.store().in_degree(v),
            Direction::Reverse => self.dag.store().out_degree(v),
        }
    }

    /// Ensure the current frontier has unconsumed vertices, rolling over to
    /// the next frontier when exhausted. Returns `false` once the traversal
    /// is finished.
    fn promote(&mut self) -> bool {
        if self.pos < self.current.len() {
            return true;
        }
        if self.next.is_empty() {
            return false;
        }
        self.next.sort_unstable();
        self.current = std::mem::take(&mut self.next);
        self.pos = 0;
        true
    }

    fn next_vertex(&mut self) -> Option<V> {
        if !self.promote() {
            return None;
        }
        let v = self.current[self.pos];
        self.pos += 1;
        self.visit(v);
        Some(v)
    }

    fn next_level(&mut self) -> Option<Vec<V>> {
        if !self.promote() {
            return None;
        }
        let level = std::mem::take(&mut self.current);
        self.pos = 0;
        for &v in &level {
            self.visit(v);
        }
        Some(level)
    }
}

/// Lazy vertex-by-vertex topological order over a [`SealedDag`].
///
/// Yields every vertex exactly once; for every edge `(u, v)` in the DAG,
/// `u` is produced strictly before `v` (forward), or strictly after it
/// (reverse). Obtain via [`SealedDag::top_order`] /
/// [`SealedDag::reverse_top_order`]; each call starts a fresh, independent
/// traversal.
pub struct TopoOrder<'a, V: VertexLike>(FrontierState<'a, V>);

impl<'a, V: VertexLike> TopoOrder<'a, V> {
    pub(crate) fn new(dag: &'a SealedDag<V>, dir: Direction) -> Self {
        TopoOrder(FrontierState::new(dag, dir))
    }
}

impl<'a, V: VertexLike> Iterator for TopoOrder<'a, V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_vertex()
    }
}

/// Lazy level-by-level topological traversal over a [`SealedDag`].
///
/// Each step yields one whole frontier. In forward mode, the level of a
/// vertex equals the length of the longest path from any source to it:
/// `level(v) = 0` if `v` has no parents, else
/// `1 + max(level(p))` over its parents. Reverse mode is the same property
/// on the edge-reversed graph. Obtain via [`SealedDag::top_levels`] /
/// [`SealedDag::reverse_top_levels`].
pub struct TopoLevels<'a, V: VertexLike>(FrontierState<'a, V>);

impl<'a, V: VertexLike> TopoLevels<'a, V> {
    pub(crate) fn new(dag: &'a SealedDag<V>, dir: Direction) -> Self {
        TopoLevels(FrontierState::new(dag, dir))
    }
}

impl<'a, V: VertexLike> Iterator for TopoLevels<'a, V> {
    type Item = Vec<V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_level()
    }
}

#[cfg(test)]
mod traversal_tests {
    use crate::graph::digraph::DirectedGraph;
    use crate::graph::sealed::SealedDag;

    fn dag(edges: &[(u32, u32)]) -> SealedDag<u32> {
        SealedDag::seal(&DirectedGraph::from_edges(edges.iter().copied())).unwrap()
    }

    #[test]
    fn chain_order_and_levels() {
        let d = dag(&[(1, 2), (2, 3)]);
        assert_eq!(d.top_order().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(
            d.top_levels().collect::<Vec<_>>(),
            vec![vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn reverse_chain() {
        let d = dag(&[(1, 2), (2, 3)]);
        assert_eq!(d.reverse_top_order().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(
            d.reverse_top_levels().collect::<Vec<_>>(),
            vec![vec![3], vec![2], vec![1]]
        );
    }

    #[test]
    fn traversals_are_independent() {
        let d = dag(&[(1, 2)]);
        let mut a = d.top_order();
        let mut b = d.top_order();
        assert_eq!(a.next(), Some(1));
        assert_eq!(b.next(), Some(1));
        assert_eq!(a.next(), Some(2));
        assert_eq!(b.next(), Some(2));
    }

    #[test]
    fn lazy_consumption_stops_midway() {
        let d = dag(&[(1, 2), (2, 3), (3, 4)]);
        let mut it = d.top_order();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        // dropping the iterator midway needs no cleanup
        drop(it);
        assert_eq!(d.top_order().count(), 4);
    }

    #[test]
    fn skip_level_edge_lands_at_longest_path_rank() {
        // 1→2→3 plus the shortcut 1→3: level(3) must be 2, not 1
        let d = dag(&[(1, 2), (2, 3), (1, 3)]);
        assert_eq!(
            d.top_levels().collect::<Vec<_>>(),
            vec![vec![1], vec![2], vec![3]]
        );
    }
}
