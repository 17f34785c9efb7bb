//! Benchmark configuration constants.

/// Seed radii for frame generation benchmarks.
pub const SEED_RADII: &[usize] = &[2, 3, 4, 5];

/// Ring radii for enumeration benchmarks.
pub const RING_RADII: &[usize] = &[3, 5, 7];

/// Placements rebased from the origin, nearest to farthest.
pub const REBASE_STARTS: &[(f64, f64, f64)] = &[(0.0, 1.0, 0.0), (0.5, 2.0, 0.3), (4.0, 5.0, 1.0)];
