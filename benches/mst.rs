use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use spanner::{Boruvka, Edge, Graph, Kruskal, MstAlgorithm, Prim};

/// Random connected graph: a spanning path plus extra random edges, with
/// distinct weights so all algorithms do identical work.
fn random_graph(n: u32, extra: usize, seed: u64) -> Graph<u32, u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::new();
    let mut w = 0u64;
    for v in 1..n {
        w += 1 + rng.random_range(0..100);
        g.add_edge(Edge::new(v - 1, v, w));
    }
    for _ in 0..extra {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            w += 1 + rng.random_range(0..100);
            g.add_edge(Edge::new(u, v, w));
        }
    }
    g
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");
    let g = random_graph(1_000, 9_000, 42);

    group.bench_function("kruskal_v1000_e10000", |b| {
        let algo = Kruskal::new(u64::cmp);
        b.iter(|| algo.compute(black_box(&g)).unwrap())
    });
    group.bench_function("prim_v1000_e10000", |b| {
        let algo = Prim::new(u64::cmp);
        b.iter(|| algo.compute(black_box(&g)).unwrap())
    });
    group.bench_function("boruvka_v1000_e10000", |b| {
        let algo = Boruvka::new(u64::cmp);
        b.iter(|| algo.compute(black_box(&g)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_mst);
criterion_main!(benches);
