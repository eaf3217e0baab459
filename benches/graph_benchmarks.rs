use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphwalk::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random graph with `size` vertices and roughly `size * degree` edges
fn random_graph(size: usize, degree: usize, directed: bool) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::new(directed);
    for i in 0..size {
        graph.add_vertex(format!("v{}", i));
    }
    for _ in 0..size * degree {
        let u = rng.gen_range(0..size);
        let v = rng.gen_range(0..size);
        // Forward-only edges keep the directed variant acyclic
        let (u, v) = if directed && u > v { (v, u) } else { (u, v) };
        if u != v {
            graph.add_edge(&format!("v{}", u), &format!("v{}", v)).unwrap();
        }
    }
    graph
}

/// Benchmark vertex and edge insertion throughput
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| random_graph(size, 4, false));
        });
    }
    group.finish();
}

/// Benchmark BFS/DFS traversal and shortest path
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [100, 1000, 10_000].iter() {
        let graph = random_graph(*size, 4, false);
        let last = format!("v{}", size - 1);

        group.bench_with_input(BenchmarkId::new("bfs", size), size, |b, _| {
            b.iter(|| criterion::black_box(graph.bfs_traversal("v0").unwrap().count()));
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), size, |b, _| {
            b.iter(|| criterion::black_box(graph.dfs_traversal("v0").unwrap().count()));
        });
        group.bench_with_input(BenchmarkId::new("shortest_path", size), size, |b, _| {
            b.iter(|| criterion::black_box(graph.find_shortest_path("v0", &last).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark the whole-graph analyses
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for size in [100, 1000, 10_000].iter() {
        let undirected = random_graph(*size, 2, false);
        let dag = random_graph(*size, 4, true);

        group.bench_with_input(BenchmarkId::new("components", size), size, |b, _| {
            b.iter(|| criterion::black_box(undirected.find_connected_components().len()));
        });
        group.bench_with_input(BenchmarkId::new("bipartite", size), size, |b, _| {
            b.iter(|| criterion::black_box(undirected.is_bipartite()));
        });
        group.bench_with_input(BenchmarkId::new("topological_sort", size), size, |b, _| {
            b.iter(|| criterion::black_box(dag.topological_sort().unwrap().len()));
        });
    }
    group.finish();
}

/// Benchmark a long chain, where recursive DFS would run deep
fn bench_long_chain(c: &mut Criterion) {
    let mut graph: Graph = Graph::directed();
    for i in 0..100_000 {
        graph.add_vertex(format!("n{}", i));
    }
    for i in 0..99_999 {
        graph.add_edge(&format!("n{}", i), &format!("n{}", i + 1)).unwrap();
    }

    c.bench_function("chain_dfs_100k", |b| {
        b.iter(|| criterion::black_box(graph.dfs_traversal("n0").unwrap().count()));
    });
    c.bench_function("chain_has_cycle_100k", |b| {
        b.iter(|| criterion::black_box(graph.contains_cycle()));
    });
}

criterion_group!(benches, bench_build, bench_traversal, bench_analysis, bench_long_chain);
criterion_main!(benches);
