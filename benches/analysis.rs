//! Performance benchmarks for path search and critical edge analysis.
//!
//! Run with: `cargo bench --bench analysis`
//!
//! Enumeration is exponential in graph density, so the grid sizes stay
//! small. The bounded cases show the cost of a capped search on the same
//! graphs.

use criterion::{
    black_box, criterion_group, criterion_main,
    BenchmarkId, Criterion,
};
use std::sync::Arc;

use courier_trust::{
    NodeId, Node, InMemoryGraphStore, SearchPolicy,
    find_path, enumerate_paths, CriticalEdgeAnalyzer, AnalysisCache,
};
use courier_trust::demo::courier_network;

/// `side × side` grid; every third node untrusted, corners trusted.
fn make_grid(side: u128) -> (InMemoryGraphStore, NodeId, NodeId) {
    let mut store = InMemoryGraphStore::new();
    let at = |r: u128, c: u128| NodeId::from_u128(r * side + c + 1);
    let last = side * side - 1;

    for idx in 0..side * side {
        let trusted = idx % 3 != 1 || idx == 0 || idx == last;
        store.add_node(Node::new(NodeId::from_u128(idx + 1), trusted));
    }
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                store.add_edge(&at(r, c), &at(r, c + 1));
            }
            if r + 1 < side {
                store.add_edge(&at(r, c), &at(r + 1, c));
            }
        }
    }

    (store, at(0, 0), at(side - 1, side - 1))
}

/// Benchmark the bounded-untrust pathfinder.
fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");

    for side in [4u128, 8, 16] {
        let (store, s, t) = make_grid(side);
        group.bench_with_input(BenchmarkId::new("grid", side), &side, |b, _| {
            b.iter(|| black_box(find_path(&store, s, t)))
        });
    }

    group.finish();
}

/// Benchmark exhaustive enumeration and full analysis.
fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");

    for side in [3u128, 4] {
        let (store, s, t) = make_grid(side);
        group.bench_with_input(BenchmarkId::new("enumerate_paths", side), &side, |b, _| {
            b.iter(|| black_box(enumerate_paths(&store, s, t).len()))
        });
        group.bench_with_input(BenchmarkId::new("critical_edges", side), &side, |b, _| {
            let analyzer = CriticalEdgeAnalyzer::new(&store);
            b.iter(|| black_box(analyzer.analyze(s, t)))
        });
    }

    let (store, s, t) = make_grid(5);
    let policy = SearchPolicy::bounded(Some(1_000), None);
    group.bench_function("critical_edges_bounded_5x5", |b| {
        let analyzer = CriticalEdgeAnalyzer::with_policy(&store, policy.clone());
        b.iter(|| black_box(analyzer.analyze(s, t)))
    });

    group.finish();
}

/// Benchmark cached analysis on the demo network.
fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");
    let net = courier_network();
    let (a, j) = match (net.node('a'), net.node('j')) {
        (Some(a), Some(j)) => (a, j),
        _ => return,
    };
    let policy = SearchPolicy::default();

    group.bench_function("uncached", |b| {
        let analyzer = CriticalEdgeAnalyzer::new(&net.store);
        b.iter(|| black_box(analyzer.analyze(a, j)))
    });

    let cache = Arc::new(AnalysisCache::default());
    cache.get_or_analyze(&net.store, &policy, a, j);
    group.bench_function("cached_hit", |b| {
        b.iter(|| black_box(cache.get_or_analyze(&net.store, &policy, a, j)))
    });

    group.finish();
}

criterion_group!(benches, bench_find_path, bench_enumeration, bench_cache);
criterion_main!(benches);
