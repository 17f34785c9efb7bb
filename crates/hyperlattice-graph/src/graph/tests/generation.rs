//! Vertex and frame generation.

use std::f64::consts::PI;

use super::{addr, default_graph};
use crate::address::{AddressRingIterator, LatticeAddress};
use crate::config::LatticeConfig;
use crate::error::LatticeError;
use crate::graph::{LatticeGraph, VertexId};
use crate::hyperbolic::Isometry;

// ========== CONSTRUCTION TESTS ==========

#[test]
fn test_default_graph_sizes() {
    let graph = default_graph();
    // Rings 0..=3 hold 1 + 5 + 14 + 37 addresses.
    assert_eq!(graph.frame_count(), 57);
    assert_eq!(graph.vertex_count(), 57);
    assert!(graph.walker_origin().is_origin());
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = LatticeConfig {
        branch_length: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        LatticeGraph::new(config),
        Err(LatticeError::InvalidConfig(_))
    ));
}

#[test]
fn test_zero_radii_hold_only_origin() {
    let config = LatticeConfig {
        frame_radius: 0,
        vertex_radius: 0,
        ..Default::default()
    };
    let graph = LatticeGraph::new(config).expect("valid");
    assert_eq!(graph.frame_count(), 1);
    assert_eq!(graph.vertex_count(), 1);
}

// ========== VERTEX TESTS ==========

#[test]
fn test_get_or_create_vertex_is_idempotent() {
    let mut graph = default_graph();
    let target = addr(&[2, 1, 0, 1]);
    assert!(graph.find_vertex(&target).is_none());

    let first = graph.get_or_create_vertex(&target).expect("valid").id();
    let count = graph.vertex_count();
    let second = graph.get_or_create_vertex(&target).expect("valid").id();

    assert_eq!(first, second);
    assert_eq!(graph.vertex_count(), count);
    assert_eq!(first, VertexId(57));
}

#[test]
fn test_get_or_create_vertex_rejects_invalid() {
    let mut graph = default_graph();
    let result = graph.get_or_create_vertex(&addr(&[0, 2]));
    assert!(matches!(result, Err(LatticeError::InvalidAddress(_))));
}

#[test]
fn test_vertices_iterate_in_address_order() {
    let graph = default_graph();
    let all: Vec<&LatticeAddress> = graph.vertices().map(|v| v.address()).collect();
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_seed_vertices_counts_new_only() {
    let mut graph = default_graph();
    assert_eq!(graph.seed_vertices(3).expect("valid"), 0);
    assert_eq!(graph.seed_vertices(4).expect("valid"), 97);
}

// ========== FRAME TESTS ==========

#[test]
fn test_root_frame() {
    let graph = default_graph();
    let root = graph.find_frame(&LatticeAddress::Origin).expect("root");
    assert!(root.vertex().is_origin());
    assert_eq!(root.direction_offset(), 0);
    assert_eq!(*root.absolute(), Isometry::identity());
    assert_eq!(*root.render(), Isometry::identity());
    assert!(root.is_valid());
}

#[test]
fn test_child_frame_placement() {
    let graph = default_graph();
    let frame = graph.find_frame(&addr(&[2])).expect("frame <2>");
    assert_eq!(*frame.vertex(), addr(&[2]));
    assert_eq!(frame.direction_offset(), 0);

    let expected = Isometry::new(4.0 * PI / 5.0, 1.255, PI);
    assert!(frame.absolute().approx_eq(&expected, 1e-12));
    assert_eq!(*frame.parent_offset(), Isometry::edge(2, 1.255, 0));
}

#[test]
fn test_frames_from_origin_sit_on_their_own_address() {
    let graph = default_graph();
    for frame in graph.frames() {
        assert_eq!(frame.vertex(), frame.address());
        let vertex = graph.find_vertex(frame.vertex()).expect("vertex exists");
        assert_eq!(vertex.attached_frame(), Some(frame.address()));
    }
}

#[test]
fn test_frames_are_placed_one_edge_from_parent() {
    let graph = default_graph();
    for frame in graph.frames() {
        let Some(parent) = frame.address().parent() else {
            continue;
        };
        let parent = graph.find_frame(&parent).expect("parent frame");
        let here = frame.absolute().position();
        let there = parent.absolute().position();
        assert!(
            (here.distance(&there) - 1.255).abs() < 1e-9,
            "{}",
            frame.address()
        );
    }
}

#[test]
fn test_frames_iterate_in_ring_order() {
    let graph = default_graph();
    let expected: Vec<LatticeAddress> = (0..=3).flat_map(AddressRingIterator::new).collect();
    let actual: Vec<LatticeAddress> = graph.frames().map(|f| f.address().clone()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_get_or_create_frame_generates_ancestors() {
    let config = LatticeConfig {
        frame_radius: 0,
        vertex_radius: 0,
        ..Default::default()
    };
    let mut graph = LatticeGraph::new(config).expect("valid");
    let target = addr(&[3, 1, 0, 1]);

    let vertex = graph
        .get_or_create_frame(&target)
        .expect("frame")
        .vertex()
        .clone();
    assert_eq!(vertex, target);
    // Origin plus four generations.
    assert_eq!(graph.frame_count(), 5);
    let ancestors: [&[u8]; 4] = [&[], &[3], &[3, 1], &[3, 1, 0]];
    for ancestor in ancestors {
        assert!(graph.find_frame(&addr(ancestor)).is_some());
    }
}

#[test]
fn test_get_or_create_frame_rejects_invalid_address() {
    let mut graph = default_graph();
    let result = graph.get_or_create_frame(&addr(&[1, 3]));
    assert!(matches!(result, Err(LatticeError::InvalidAddress(_))));
}

#[test]
fn test_seed_is_memoized() {
    let mut graph = default_graph();
    let report = graph.seed(3).expect("seed");
    assert_eq!(report.frames_created, 0);
    assert_eq!(report.vertices_created, 0);

    let report = graph.seed(4).expect("seed");
    assert_eq!(report.frames_created, 97);
    assert_eq!(graph.frame_count(), 57 + 97);
}
