//! Borůvka's algorithm: round-based component merging.
//!
//! Every vertex starts as its own disjoint-set class. Each round scans all
//! edges once, recording for every class the cheapest edge leaving it;
//! after the scan, each recorded edge whose endpoints are still in
//! different classes is accepted and the classes are merged. A round at
//! least halves the number of components of a connected graph, so the
//! round counter doubles geometrically (`t = 1; t < |V|; t *= 2`) to bound
//! the loop at O(log |V|) rounds; a round that merges nothing terminates
//! early (disconnected graph, result is a spanning forest).
//!
//! Tie-break: when two candidate edges for the same class compare equal,
//! the first one encountered in the current round's scan order wins. Scan
//! order is the graph's edge insertion order by default; callers wanting
//! unbiased ties can opt into an explicit, seeded shuffle of the scan
//! order ([`Boruvka::with_shuffle_seed`]), keeping every run reproducible.

use super::{MstAlgorithm, MstResult};
use crate::error::Result;
use crate::graph::Graph;
use crate::unionfind::DisjointSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::hash::Hash;

/// Borůvka's MST algorithm, parameterized by an attribute comparator.
#[derive(Clone, Debug)]
pub struct Boruvka<C> {
    cmp: C,
    shuffle_seed: Option<u64>,
}

impl<C> Boruvka<C> {
    /// Create the algorithm with the comparator that orders edge
    /// attributes (smallest first wins).
    pub fn new(cmp: C) -> Self {
        Self {
            cmp,
            shuffle_seed: None,
        }
    }

    /// Shuffle the edge scan order once, with a seeded generator, before
    /// the rounds start. This only changes which edge wins a weight tie;
    /// with distinct weights the result is identical for every seed.
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}

impl<V, X, C> MstAlgorithm<V, X> for Boruvka<C>
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

        let mut order: Vec<usize> = (0..graph.n_edges()).collect();
        if let Some(seed) = self.shuffle_seed {
            order.shuffle(&mut StdRng::seed_from_u64(seed));
        }

        let mut sets = DisjointSet::new(n);
        let mut accepted = Vec::with_capacity(n - 1);

        let mut t = 1;
        while t < n && accepted.len() < n - 1 {
            // Cheapest edge leaving each class, keyed by class root id.
            let mut closest: Vec<Option<usize>> = vec![None; n];

            for &idx in &order {
                let (u, v) = graph.edge_ends(idx);
                let ru = sets.find_unchecked(u);
                let rv = sets.find_unchecked(v);
                if ru == rv {
                    continue;
                }
                for class in [ru, rv] {
                    // Strict "less" keeps the first encountered edge on a tie.
                    let better = match closest[class] {
                        None => true,
                        Some(cur) => {
                            (self.cmp)(&graph.edge(idx).attr, &graph.edge(cur).attr)
                                == Ordering::Less
                        }
                    };
                    if better {
                        closest[class] = Some(idx);
                    }
                }
            }

            let mut merged = false;
            for class in 0..n {
                let Some(idx) = closest[class] else {
                    continue;
                };
                let (u, v) = graph.edge_ends(idx);
                let ru = sets.find_unchecked(u);
                let rv = sets.find_unchecked(v);
                // Two classes can pick the same edge, or an earlier merge
                // this round can already have joined them.
                if ru != rv {
                    sets.union_roots(ru, rv);
                    accepted.push(graph.edge(idx).clone());
                    merged = true;
                }
            }

            if !merged {
                break;
            }
            t *= 2;
        }

        Ok(MstResult::new(accepted))
    }
}
