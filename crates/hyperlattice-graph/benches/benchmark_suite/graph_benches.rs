//! Graph generation and rebasing benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use hyperlattice_graph::{AnchoredFrame, Isometry, LatticeAddress, LatticeConfig, LatticeGraph};

use super::config;

fn config_with_radius(frame_radius: usize) -> LatticeConfig {
    LatticeConfig::with_frame_radius(frame_radius)
}

/// Benchmark seeding and both recentering paths.
pub fn bench_graph_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");

    for &radius in config::SEED_RADII {
        group.bench_with_input(BenchmarkId::new("new", radius), &radius, |b, &r| {
            b.iter(|| LatticeGraph::new(config_with_radius(black_box(r))))
        });
    }

    let base = LatticeGraph::new(LatticeConfig::default()).expect("valid config");
    let placement = Isometry::new(0.3, 0.5, 0.1);

    group.bench_function("recenter_same_origin", |b| {
        let mut graph = base.clone();
        b.iter(|| graph.recenter(&LatticeAddress::Origin, black_box(&placement)))
    });

    let origins = [
        LatticeAddress::from_digits(vec![2]),
        LatticeAddress::from_digits(vec![3, 1]),
    ];
    group.bench_function("recenter_new_origin", |b| {
        let mut graph = base.clone();
        let mut flip = 0;
        b.iter(|| {
            flip ^= 1;
            graph.recenter(black_box(&origins[flip]), &placement)
        })
    });

    group.finish();
}

/// Benchmark rebasing from increasingly distant placements.
pub fn bench_rebase(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebase");
    let base = LatticeGraph::new(LatticeConfig::default()).expect("valid config");

    for &(n, s, m) in config::REBASE_STARTS {
        group.bench_with_input(BenchmarkId::new("from_origin", s), &s, |b, _| {
            b.iter(|| {
                let mut graph = base.clone();
                let mut frame =
                    AnchoredFrame::new(&mut graph, Isometry::new(n, s, m), LatticeAddress::Origin)
                        .expect("origin is valid");
                frame.rebase(&mut graph)
            })
        });
    }

    group.finish();
}
