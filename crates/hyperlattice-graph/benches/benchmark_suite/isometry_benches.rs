//! Isometry algebra benchmarks.

use criterion::{black_box, Criterion};

use hyperlattice_graph::hyperbolic::Isometry;

/// Benchmark composition, inverse and the individual closed-form moves.
pub fn bench_isometry_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("isometry");

    let x = Isometry::new(0.3, 1.1, -0.7);
    let y = Isometry::new(2.5, -0.8, 1.9);

    group.bench_function("compose", |b| {
        b.iter(|| black_box(&x).compose(black_box(&y)))
    });

    group.bench_function("distance_to", |b| {
        b.iter(|| black_box(&x).distance_to(black_box(&y)))
    });

    group.bench_function("preapply_translation_y", |b| {
        b.iter(|| {
            let mut moved = black_box(x);
            moved.preapply_translation_y(black_box(0.04));
            moved
        })
    });

    group.bench_function("to_matrix", |b| b.iter(|| black_box(&x).to_matrix()));

    // Long chains stay bounded only through renormalization.
    group.bench_function("chain_1000_normalized", |b| {
        b.iter(|| {
            let mut walker = Isometry::identity();
            for _ in 0..1000 {
                walker.preapply_translation_y(0.04);
                walker.preapply_rotation(0.01);
                walker = walker.normalized();
            }
            walker
        })
    });

    group.finish();
}
