//! Acyclicity validation, run once at seal time.
//!
//! Iterative DFS with an explicit stack; recursion depth never limits graph
//! size. Vertices are colored gray (`on_stack`, on the active DFS path) and
//! black (`done`, fully explored). A child that is already gray is a
//! back-edge, i.e. a cycle.

use hashbrown::HashSet;

use super::bounds::VertexLike;
use super::query::DigraphQuery;

/// Whether `graph` contains a directed cycle.
///
/// The walk is rooted at the graph's sources. A non-empty graph in which no
/// vertex is a source is necessarily cyclic, and so is any graph with a
/// source-less cyclic core hanging off to one side; both are caught by the
/// final completeness check rather than by back-edge detection, since no
/// source-rooted walk reaches them.
pub(crate) fn has_cycle<V, G>(graph: &G) -> bool
where
    V: VertexLike,
    G: DigraphQuery<V>,
{
    let total = graph.vertex_count();
    if total == 0 {
        return false;
    }

    let mut stack: Vec<V> = graph.sources().into_iter().collect();
    let mut on_stack: HashSet<V> = HashSet::new();
    let mut done: HashSet<V> = HashSet::new();

    while let Some(&v) = stack.last() {
        if done.contains(&v) {
            // reached earlier through another parent
            stack.pop();
            continue;
        }
        if on_stack.insert(v) {
            for c in graph.children(v) {
                if done.contains(&c) {
                    continue;
                }
                if on_stack.contains(&c) {
                    log::debug!("cycle detected: back edge {v:?} -> {c:?}");
                    return true;
                }
                stack.push(c);
            }
        } else {
            // second visit: all children explored
            stack.pop();
            on_stack.remove(&v);
            done.insert(v);
        }
    }

    if done.len() != total {
        log::debug!(
            "cycle detected: {} of {total} vertices unreachable from any source",
            total - done.len()
        );
        return true;
    }
    false
}
