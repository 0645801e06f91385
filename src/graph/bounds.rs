//! Common bound aliases used across graph code.
//!
//! The trait has a blanket impl, so any type satisfying the underlying
//! bounds implements it automatically. It is zero-cost and only reduces
//! duplication in `where` clauses.

/// Canonical bound set for vertex values.
///
/// Rationale:
/// - `Copy` for cheap pass-by-value in tight traversal loops
/// - `Eq + Hash` for `HashMap`-backed adjacencies
/// - `Ord` to allow deterministic ordering (sorted frontiers and levels)
/// - `Debug` for diagnostics and invariant checks
///
/// Heavyweight vertex payloads should be interned behind a small `Copy`
/// identifier rather than stored in the graph directly.
pub trait VertexLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> VertexLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
