//! Minimum spanning tree algorithms.
//!
//! Three interchangeable algorithms compute a minimum-weight spanning
//! forest over a [`Graph`], all behind the same [`MstAlgorithm`] contract:
//!
//! - [`Kruskal`]: global greedy — heapify every edge, pop cheapest-first,
//!   filter cycles with a disjoint set. O(E log E).
//! - [`Prim`]: local greedy — grow a tree from a frontier, lazily
//!   tolerating stale queue entries. O(E log V).
//! - [`Boruvka`]: round-based — every component picks its cheapest
//!   outgoing edge, all picks are merged, repeat. O(E log V), with at most
//!   O(log V) rounds since each round at least halves the component count.
//!
//! On a connected graph with `n` vertices every algorithm returns exactly
//! `n - 1` edges; on a disconnected graph they return a spanning *forest*
//! (one tree per component) without raising an error — callers detect the
//! condition by comparing [`MstResult::len`] against `n - 1`.
//!
//! Ordering over edge attributes is not implicit: each algorithm takes an
//! explicit comparator at construction. When all weights are distinct the
//! MST is unique and the three algorithms agree edge-for-edge; under ties
//! each algorithm documents its own tie-break and callers wanting one
//! specific answer should embed a tiebreaker in the attribute itself.

mod boruvka;
mod kruskal;
mod prim;

pub use boruvka::Boruvka;
pub use kruskal::Kruskal;
pub use prim::Prim;

use crate::error::Result;
use crate::graph::{Edge, Graph};

/// A spanning-forest algorithm over a weighted graph.
///
/// Implementations own whatever working state they need (heaps, disjoint
/// sets) per invocation; the input graph is never mutated.
pub trait MstAlgorithm<V, X> {
    /// Compute a minimum-weight spanning forest of `graph`.
    fn compute(&self, graph: &Graph<V, X>) -> Result<MstResult<V, X>>;
}

/// The edges accepted into a spanning forest, in acceptance order.
///
/// Built once per algorithm invocation and immutable afterward. Sequence
/// numbers are not stored on the edges; they are the positions in this
/// sequence, surfaced by [`MstResult::sequenced`].
#[derive(Clone, Debug)]
pub struct MstResult<V, X> {
    edges: Vec<Edge<V, X>>,
}

impl<V, X> MstResult<V, X> {
    pub(crate) fn new(edges: Vec<Edge<V, X>>) -> Self {
        Self { edges }
    }

    /// Number of accepted edges (`|V| - c` for `c` connected components).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when the forest has no edges (empty or edgeless input).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Accepted edges in acceptance order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Edge<V, X>> {
        self.edges.iter()
    }

    /// Accepted edges paired with their 0-based sequence number, assigned
    /// in acceptance order.
    pub fn sequenced(&self) -> impl ExactSizeIterator<Item = (usize, &Edge<V, X>)> {
        self.edges.iter().enumerate()
    }

    /// Sum `f` over every accepted edge's attribute.
    pub fn total_by<F>(&self, f: F) -> f64
    where
        F: Fn(&X) -> f64,
    {
        self.edges.iter().map(|e| f(&e.attr)).sum()
    }

    /// Consume the result, yielding the accepted edges in order.
    pub fn into_edges(self) -> Vec<Edge<V, X>> {
        self.edges
    }
}

impl<V, X> IntoIterator for MstResult<V, X> {
    type Item = Edge<V, X>;
    type IntoIter = std::vec::IntoIter<Edge<V, X>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

#[cfg(test)]
pub(crate) mod testgraphs {
    //! Shared fixtures for the per-algorithm test modules.

    use crate::graph::{Edge, Graph};

    /// 4-vertex cycle with weights 1..4: the MST drops the weight-4 edge,
    /// total weight 6.
    pub fn cycle4() -> Graph<u32, u64> {
        [
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 2),
            Edge::new(2, 3, 3),
            Edge::new(3, 0, 4),
        ]
        .into_iter()
        .collect()
    }

    /// 5-vertex graph with a known optimal total weight of 7:
    /// MST is {0-1:1, 1-2:2, 1-3:1, 3-4:3}.
    pub fn known5() -> Graph<u32, u64> {
        [
            Edge::new(0, 1, 1),
            Edge::new(0, 2, 4),
            Edge::new(1, 2, 2),
            Edge::new(1, 3, 1),
            Edge::new(2, 4, 5),
            Edge::new(3, 4, 3),
            Edge::new(2, 3, 6),
        ]
        .into_iter()
        .collect()
    }

    /// Two disjoint triangles: 6 vertices, 2 components, forest of 4 edges.
    pub fn twin_triangles() -> Graph<u32, u64> {
        [
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 2),
            Edge::new(2, 0, 3),
            Edge::new(3, 4, 1),
            Edge::new(4, 5, 2),
            Edge::new(5, 3, 3),
        ]
        .into_iter()
        .collect()
    }

    /// Normalize a forest's edges to sorted `(min, max, weight)` triples
    /// for set comparison across algorithms.
    pub fn canonical(edges: impl Iterator<Item = (u32, u32, u64)>) -> Vec<(u32, u32, u64)> {
        let mut out: Vec<_> = edges
            .map(|(u, v, w)| (u.min(v), u.max(v), w))
            .collect();
        out.sort_unstable();
        out
    }
}
