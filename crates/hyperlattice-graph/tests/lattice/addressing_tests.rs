//! Ring enumeration against registry contents.

use hyperlattice_graph::address::{addresses_within, AddressRingIterator};
use hyperlattice_graph::AddressKind;

use crate::common::{addr, default_graph};

#[test]
fn test_ring_order_matches_registry_order() {
    println!("\n=== TEST: Ring Order vs Registry Order ===");
    let graph = default_graph();

    let from_rings: Vec<_> = addresses_within(3).collect();
    let from_frames: Vec<_> = graph.frames().map(|f| f.address().clone()).collect();
    let from_vertices: Vec<_> = graph.vertices().map(|v| v.address().clone()).collect();

    assert_eq!(from_frames, from_rings);
    assert_eq!(from_vertices, from_rings);
    println!("  {} addresses in matching order", from_rings.len());
}

#[test]
fn test_small_rings() {
    let ring0: Vec<_> = AddressRingIterator::new(0).collect();
    assert_eq!(ring0.len(), 1);
    assert!(ring0[0].is_origin());

    let ring1: Vec<String> = AddressRingIterator::new(1).map(|a| a.to_string()).collect();
    assert_eq!(ring1, vec!["<0>", "<1>", "<2>", "<3>", "<4>"]);

    let ring2: Vec<_> = AddressRingIterator::new(2).collect();
    assert_eq!(ring2.len(), 14);
    assert!(ring2.iter().all(|a| a.kind() != AddressKind::Invalid));
}

#[test]
fn test_origin_child_round_trip() {
    let child = addr(&[]).neighbor(2);
    assert_eq!(child, addr(&[2]));
    assert_eq!(child.neighbor(0), addr(&[]));
}

#[test]
fn test_vertex_identity_is_stable() {
    let mut graph = default_graph();
    let a = graph
        .get_or_create_vertex(&addr(&[4, 2, 2, 1]))
        .expect("valid")
        .id();
    graph.seed(4).expect("seed");
    let b = graph
        .get_or_create_vertex(&addr(&[4, 2, 2, 1]))
        .expect("valid")
        .id();
    assert_eq!(a, b);
}
