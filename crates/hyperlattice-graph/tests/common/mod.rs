//! Shared helpers for integration tests.

#![allow(dead_code)]

use hyperlattice_graph::{LatticeAddress, LatticeConfig, LatticeGraph};

/// Route library tracing to the test harness once per binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("hyperlattice_graph=debug"))
        .with_test_writer()
        .try_init();
}

pub fn addr(digits: &[u8]) -> LatticeAddress {
    LatticeAddress::from_digits(digits.to_vec())
}

/// Graph with the default configuration: vertices to radius 2, frames to 3.
pub fn default_graph() -> LatticeGraph {
    init_tracing();
    LatticeGraph::new(LatticeConfig::default()).expect("default config is valid")
}
