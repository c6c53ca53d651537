use proptest::prelude::*;
use spanner::{
    Boruvka, DisjointSet, Edge, Graph, Heap, Kruskal, MstAlgorithm, Origin, PopStrategy, Prim,
};

/// Build a graph from endpoint pairs, assigning each edge a distinct
/// weight (its position in the already-shuffled list). Distinct weights
/// make the MST unique, which is what lets the agreement properties
/// compare algorithms edge-for-edge.
fn graph_from(pairs: &[(u32, u32)]) -> Graph<u32, u64> {
    let mut g = Graph::new();
    for (i, &(u, v)) in pairs.iter().enumerate() {
        if u != v {
            g.add_edge(Edge::new(u, v, i as u64 + 1));
        }
    }
    g
}

fn canonical(mst: &spanner::MstResult<u32, u64>) -> Vec<(u32, u32, u64)> {
    let mut out: Vec<_> = mst
        .iter()
        .map(|e| (e.from.min(e.to), e.from.max(e.to), e.attr))
        .collect();
    out.sort_unstable();
    out
}

fn component_count(g: &Graph<u32, u64>) -> usize {
    let mut sets = spanner::VertexSets::new(g.vertices().copied());
    for e in g.edges() {
        sets.union(&e.from, &e.to).unwrap();
    }
    sets.classes()
}

proptest! {
    #[test]
    fn prop_algorithms_agree_on_distinct_weights(
        pairs in prop::collection::vec((0u32..10, 0u32..10), 1..40).prop_shuffle()
    ) {
        let g = graph_from(&pairs);
        if g.n_vertices() == 0 {
            return Ok(());
        }

        let kruskal = Kruskal::new(u64::cmp).compute(&g).unwrap();
        let prim = Prim::new(u64::cmp).compute(&g).unwrap();
        let boruvka = Boruvka::new(u64::cmp).compute(&g).unwrap();

        prop_assert_eq!(canonical(&kruskal), canonical(&prim));
        prop_assert_eq!(canonical(&kruskal), canonical(&boruvka));
    }

    #[test]
    fn prop_forest_size_matches_component_count(
        pairs in prop::collection::vec((0u32..12, 0u32..12), 1..50)
    ) {
        let g = graph_from(&pairs);
        if g.n_vertices() == 0 {
            return Ok(());
        }
        let expected = g.n_vertices() - component_count(&g);

        for mst in [
            Kruskal::new(u64::cmp).compute(&g).unwrap(),
            Prim::new(u64::cmp).compute(&g).unwrap(),
            Boruvka::new(u64::cmp).compute(&g).unwrap(),
        ] {
            prop_assert_eq!(mst.len(), expected);
        }
    }

    #[test]
    fn prop_result_connects_what_the_input_connects(
        pairs in prop::collection::vec((0u32..8, 0u32..8), 1..30)
    ) {
        let g = graph_from(&pairs);
        if g.n_vertices() == 0 {
            return Ok(());
        }
        let mst = Prim::new(u64::cmp).compute(&g).unwrap();

        // Union over only the accepted edges must reproduce the input's
        // connectivity exactly.
        let mut over_mst = spanner::VertexSets::new(g.vertices().copied());
        for e in mst.iter() {
            over_mst.union(&e.from, &e.to).unwrap();
        }
        let mut over_input = spanner::VertexSets::new(g.vertices().copied());
        for e in g.edges() {
            over_input.union(&e.from, &e.to).unwrap();
        }
        prop_assert_eq!(over_mst.classes(), over_input.classes());
    }

    #[test]
    fn prop_heap_pops_sorted(
        keys in prop::collection::vec(any::<i64>(), 0..200),
        origin_one in any::<bool>(),
        floyd in any::<bool>(),
    ) {
        let origin = if origin_one { Origin::One } else { Origin::Zero };
        let strategy = if floyd { PopStrategy::Floyd } else { PopStrategy::Sink };

        let mut heap = Heap::min(i64::cmp).with_origin(origin).with_pop(strategy);
        for &k in &keys {
            heap.push(k);
        }

        let mut popped = Vec::with_capacity(keys.len());
        while !heap.is_empty() {
            popped.push(heap.pop().unwrap());
        }

        let mut expected = keys.clone();
        expected.sort_unstable();
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn prop_heapify_equals_incremental(
        keys in prop::collection::vec(any::<i32>(), 0..120),
    ) {
        let bulk = Heap::min(i32::cmp).heapify(keys.clone());
        let mut incremental = Heap::min(i32::cmp);
        for &k in &keys {
            incremental.push(k);
        }
        prop_assert_eq!(bulk.len(), incremental.len());

        let drain = |mut h: Heap<i32, _>| {
            let mut out = Vec::new();
            while !h.is_empty() {
                out.push(h.pop().unwrap());
            }
            out
        };
        prop_assert_eq!(drain(bulk), drain(incremental));
    }

    #[test]
    fn prop_unionfind_connectivity_matches_find(
        unions in prop::collection::vec((0usize..16, 0usize..16), 0..40)
    ) {
        let mut sets = DisjointSet::new(16);
        for &(a, b) in &unions {
            sets.union(a, b).unwrap();
        }
        for a in 0..16 {
            for b in 0..16 {
                let connected = sets.connected(a, b).unwrap();
                let same_root = sets.find(a).unwrap() == sets.find(b).unwrap();
                prop_assert_eq!(connected, same_root);
            }
        }
    }
}
