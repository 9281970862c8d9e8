use classic_sssp::graph::generators::random_graph;
use classic_sssp::{ArrayDijkstra, HeapDijkstra, ShortestPathAlgorithm};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// The point of keeping both strategies: the linear scan wins on small or
/// dense inputs, the indexed heap wins as graphs grow sparse and large.
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("sssp");

    for &n in &[100usize, 400, 1600] {
        let graph = random_graph(n, 4, 100, 7).expect("benchmark graph");

        group.bench_with_input(BenchmarkId::new("array", n), &graph, |b, g| {
            b.iter(|| ArrayDijkstra::new().compute_shortest_paths(black_box(g), 0))
        });
        group.bench_with_input(BenchmarkId::new("heap", n), &graph, |b, g| {
            b.iter(|| HeapDijkstra::new().compute_shortest_paths(black_box(g), 0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
