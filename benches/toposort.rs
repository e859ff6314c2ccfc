//! Criterion benchmarks for the two topological sorting algorithms.

#![allow(clippy::unit_arg)] // Required for black_box uses

use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use topobench::{dfs_sort, kahn_sort, DiGraph};

const DENSITY: f64 = 0.05;

fn make_dag(nodes: usize) -> DiGraph {
    let mut rng = StdRng::seed_from_u64(0xDA6);
    DiGraph::random_dag(nodes, DENSITY, &mut rng)
}

fn criterion_toposort(c: &mut Criterion) {
    let mut g = c.benchmark_group("topological sort of a random dag");
    g.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in [100, 1_000, 5_000] {
        let graph = make_dag(size);
        g.bench_with_input(BenchmarkId::new("dfs_sort", size), &graph, |b, graph| {
            b.iter(|| black_box(dfs_sort(graph).unwrap()))
        });
        g.bench_with_input(BenchmarkId::new("kahn_sort", size), &graph, |b, graph| {
            b.iter(|| black_box(kahn_sort(graph).unwrap()))
        });
    }
    g.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_toposort,
}
criterion_main!(benches);
