//! Benchmarks for the hot pipeline stages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skew_spectra_core::{
    analyze_graph, search, CanonStrategy, Canonicalizer, ExactLabeling, Graph, RefinementHash,
    SearchConfig,
};

fn bench_search(c: &mut Criterion) {
    let config = SearchConfig::default();
    c.bench_function("search_n4", |b| {
        b.iter(|| search(black_box(4), &config))
    });
    c.bench_function("search_n5", |b| {
        b.iter(|| search(black_box(5), &config))
    });

    let exact = SearchConfig::builder()
        .canonicalization(CanonStrategy::ExactLabeling)
        .build();
    c.bench_function("search_n4_exact_labeling", |b| {
        b.iter(|| search(black_box(4), &exact))
    });
}

fn bench_analysis(c: &mut Criterion) {
    let config = SearchConfig::default();
    let k6: Vec<(usize, usize)> = (0..6).flat_map(|i| ((i + 1)..6).map(move |j| (i, j))).collect();
    let graph = Graph::new(6, k6);
    c.bench_function("analyze_k6", |b| {
        b.iter(|| analyze_graph(black_box(&graph), &config))
    });
}

fn bench_canonical(c: &mut Criterion) {
    let cycle = Graph::new(7, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (0, 6)]);
    c.bench_function("refinement_hash_c7", |b| {
        b.iter(|| RefinementHash.key(black_box(&cycle)))
    });
    c.bench_function("exact_labeling_c7", |b| {
        b.iter(|| ExactLabeling.key(black_box(&cycle)))
    });
}

criterion_group!(benches, bench_search, bench_analysis, bench_canonical);
criterion_main!(benches);
