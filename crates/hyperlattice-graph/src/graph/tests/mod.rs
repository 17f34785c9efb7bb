//! Tests for LatticeGraph.

mod generation;
mod recenter;

use crate::address::LatticeAddress;
use crate::config::LatticeConfig;
use crate::graph::LatticeGraph;

pub(super) fn addr(digits: &[u8]) -> LatticeAddress {
    LatticeAddress::from_digits(digits.to_vec())
}

pub(super) fn default_graph() -> LatticeGraph {
    LatticeGraph::new(LatticeConfig::default()).expect("default config is valid")
}
