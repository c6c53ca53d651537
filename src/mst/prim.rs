//! Prim's algorithm, lazy variant: local greedy growth from a frontier.
//!
//! The tree grows one vertex at a time. Scanning a vertex marks it and
//! pushes every edge toward a still-unmarked neighbor onto a min-heap of
//! candidates. "Lazy" means duplicates and stale entries (edges whose far
//! endpoint got marked by a later scan) are tolerated in the heap and
//! filtered when popped, instead of being removed eagerly on insertion of
//! a better edge.
//!
//! Disconnected graphs are covered by restarting from the next unmarked
//! vertex once the queue drains, which turns the result into a spanning
//! forest. A single-vertex graph (or component) contributes no edges and
//! no error.

use super::{MstAlgorithm, MstResult};
use crate::error::Result;
use crate::graph::Graph;
use crate::heap::Heap;
use std::cmp::Ordering;
use std::hash::Hash;

/// Lazy Prim's MST algorithm, parameterized by an attribute comparator.
#[derive(Clone, Debug)]
pub struct Prim<C> {
    cmp: C,
}

impl<C> Prim<C> {
    /// Create the algorithm with the comparator that orders edge
    /// attributes (smallest first wins).
    pub fn new(cmp: C) -> Self {
        Self { cmp }
    }
}

impl<V, X, C> MstAlgorithm<V, X> for Prim<C>
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

        let mut marked = vec![false; n];
        let mut queue = Heap::min(|&a: &usize, &b: &usize| {
            (self.cmp)(&graph.edge(a).attr, &graph.edge(b).attr)
        });
        let mut accepted = Vec::with_capacity(n - 1);

        // One pass per component: the inner loop drains the queue before
        // the outer loop restarts from the next unmarked vertex.
        for start in 0..n {
            if marked[start] {
                continue;
            }
            scan(graph, &mut marked, &mut queue, start);

            while !queue.is_empty() {
                let idx = queue.pop()?;
                let (u, v) = graph.edge_ends(idx);
                if marked[u] && marked[v] {
                    // Stale entry: the far endpoint joined the tree via a
                    // cheaper edge after this one was queued.
                    continue;
                }
                accepted.push(graph.edge(idx).clone());
                let next = if marked[u] { v } else { u };
                scan(graph, &mut marked, &mut queue, next);
            }
        }

        Ok(MstResult::new(accepted))
    }
}

/// Mark `v` and queue every edge from it to a still-unmarked neighbor.
fn scan<V, X, C>(
    graph: &Graph<V, X>,
    marked: &mut [bool],
    queue: &mut Heap<usize, C>,
    v: usize,
) where
    V: Hash + Eq + Clone,
    C: Fn(&usize, &usize) -> Ordering,
{
    marked[v] = true;
    for &idx in graph.adjacent_ids(v) {
        let (a, b) = graph.edge_ends(idx);
        let far = if a == v { b } else { a };
        if !marked[far] {
            queue.push(idx);
        }
    }
}
