//! Kruskal's algorithm: global greedy by weight.
//!
//! All edges go into a min-heap in one linear heapify pass; the main loop
//! pops the cheapest remaining edge and accepts it iff its endpoints lie
//! in different disjoint-set classes. The loop stops as soon as `|V| - 1`
//! edges are accepted or the heap runs dry (disconnected input, in which
//! case the accepted edges form a spanning forest).
//!
//! Tie-break under equal weights follows the order the heap happens to
//! surface them, which depends on insertion order and heap layout — it is
//! a consistent total order but not input edge order.

use super::{MstAlgorithm, MstResult};
use crate::error::Result;
use crate::graph::Graph;
use crate::heap::Heap;
use crate::unionfind::DisjointSet;
use std::cmp::Ordering;
use std::hash::Hash;

/// Kruskal's MST algorithm, parameterized by an attribute comparator.
#[derive(Clone, Debug)]
pub struct Kruskal<C> {
    cmp: C,
}

impl<C> Kruskal<C> {
    /// Create the algorithm with the comparator that orders edge
    /// attributes (smallest first wins).
    pub fn new(cmp: C) -> Self {
        Self { cmp }
    }
}

impl<V, X, C> MstAlgorithm<V, X> for Kruskal<C>
where
    V: Hash + Eq + Clone,
    X: Clone,
    C: Fn(&X, &X) -> Ordering,
{
    fn compute(&self, graph: &Graph<V, X>) -> Result<MstResult<V, X>> {
        let n = graph.n_vertices();
        if n == 0 {
            return Ok(MstResult::new(Vec::new()));
        }

        // Heap over edge indices; the comparator reaches back into the
        // graph for the attributes so edges are never copied into it.
        let mut queue = Heap::min(|&a: &usize, &b: &usize| {
            (self.cmp)(&graph.edge(a).attr, &graph.edge(b).attr)
        })
        .heapify(0..graph.n_edges());

        let mut sets = DisjointSet::new(n);
        let mut accepted = Vec::with_capacity(n - 1);

        while accepted.len() < n - 1 && !queue.is_empty() {
            let idx = queue.pop()?;
            let (u, v) = graph.edge_ends(idx);
            let ru = sets.find_unchecked(u);
            let rv = sets.find_unchecked(v);
            if ru != rv {
                sets.union_roots(ru, rv);
                accepted.push(graph.edge(idx).clone());
            }
        }

        Ok(MstResult::new(accepted))
    }
}
