//! Address navigation benchmarks.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use hyperlattice_graph::address::{AddressRingIterator, LatticeAddress};

use super::config;

/// Benchmark neighbor carries and ring enumeration.
pub fn bench_address_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("address");

    let deep = LatticeAddress::from_digits(vec![2, 1, 2, 2, 2, 2, 2, 2]);
    group.bench_function("neighbor_carry", |b| {
        b.iter(|| black_box(&deep).neighbor(black_box(4)))
    });

    let branch2 = LatticeAddress::from_digits(vec![3, 1, 0, 0, 0, 0]);
    group.bench_function("neighbor_sibling", |b| {
        b.iter(|| black_box(&branch2).neighbor(black_box(1)))
    });

    for &radius in config::RING_RADII {
        let size = AddressRingIterator::new(radius).count();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("ring", radius), &radius, |b, &r| {
            b.iter(|| AddressRingIterator::new(black_box(r)).count())
        });
    }

    group.finish();
}
