use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sealed_dag::prelude::*;

/// Layered random DAG: `layers` ranks of `width` vertices, edges only from
/// one rank to the next with probability `p`. Acyclic by construction.
fn layered_dag(layers: u32, width: u32, p: f64, seed: u64) -> SealedDag<u32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut g = DirectedGraph::new();
    for l in 0..layers {
        for i in 0..width {
            g.add_vertex(l * width + i);
        }
    }
    for l in 0..layers - 1 {
        for i in 0..width {
            for j in 0..width {
                if rng.r#gen::<f64>() < p {
                    g.add_edge(l * width + i, (l + 1) * width + j);
                }
            }
        }
    }
    SealedDag::seal(&g).expect("layered graph is acyclic")
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for &layers in &[10u32, 50, 100] {
        let dag = layered_dag(layers, 20, 0.3, 0xDA6);
        group.bench_with_input(BenchmarkId::new("top_order", layers), &dag, |b, dag| {
            b.iter(|| dag.top_order().count())
        });
        group.bench_with_input(BenchmarkId::new("top_levels", layers), &dag, |b, dag| {
            b.iter(|| dag.top_levels().count())
        });
    }
    group.finish();
}

fn bench_seal(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal");
    for &layers in &[10u32, 50, 100] {
        let mut rng = SmallRng::seed_from_u64(0xDA6);
        let width = 20u32;
        let mut g = DirectedGraph::new();
        for l in 0..layers - 1 {
            for i in 0..width {
                for j in 0..width {
                    if rng.r#gen::<f64>() < 0.3 {
                        g.add_edge(l * width + i, (l + 1) * width + j);
                    }
                }
            }
        }
        group.bench_with_input(BenchmarkId::from_parameter(layers), &g, |b, g| {
            b.iter(|| SealedDag::seal(g).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_seal);
criterion_main!(benches);
