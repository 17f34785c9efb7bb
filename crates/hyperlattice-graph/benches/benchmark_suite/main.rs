//! Benchmark suite for hyperlattice-graph.
//!
//! Covers the per-tick hot paths of an interactive loop:
//! - isometry composition and the closed-form moves
//! - address navigation and ring enumeration
//! - frame seeding, recentering and rebasing
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package hyperlattice-graph
//!
//! # Run specific benchmark
//! cargo bench --package hyperlattice-graph -- isometry
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod address_benches;
mod config;
mod graph_benches;
mod isometry_benches;

// ============================================================================
// CRITERION SETUP
// ============================================================================

criterion_group!(
    name = isometry_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(3));
    targets = isometry_benches::bench_isometry_moves
);

criterion_group!(
    name = address_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(3));
    targets = address_benches::bench_address_navigation
);

criterion_group!(
    name = graph_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = graph_benches::bench_graph_generation, graph_benches::bench_rebase
);

criterion_main!(isometry_bench_group, address_bench_group, graph_bench_group);
