//! Recentering the frame tree.

use super::{addr, default_graph};
use crate::address::LatticeAddress;
use crate::config::LatticeConfig;
use crate::error::LatticeError;
use crate::graph::LatticeGraph;
use crate::hyperbolic::Isometry;

#[test]
fn test_same_origin_keeps_topology() {
    let mut graph = default_graph();
    let placement = Isometry::new(0.3, 0.5, 0.1);

    let report = graph
        .recenter(&LatticeAddress::Origin, &placement)
        .expect("recenter");
    assert_eq!(report.frames_created, 0);
    assert_eq!(graph.frame_count(), 57);
    assert_eq!(*graph.root_placement(), placement);

    for frame in graph.frames() {
        assert!(frame.is_valid());
    }

    // Every placement moved by the new root placement.
    let moved = graph.find_frame(&addr(&[2, 1])).expect("frame");
    let fresh = default_graph();
    let before = fresh.find_frame(&addr(&[2, 1])).expect("frame");
    assert!(moved.absolute().approx_eq(&placement.compose(before.absolute()), 1e-9));
}

#[test]
fn test_new_origin_regenerates_frames() {
    let mut graph = default_graph();
    let report = graph
        .recenter(&addr(&[2]), &Isometry::identity())
        .expect("recenter");

    assert_eq!(*graph.walker_origin(), addr(&[2]));
    assert_eq!(report.frames_created, 57);
    assert_eq!(report.frames_skipped, 0);

    let root = graph.find_frame(&LatticeAddress::Origin).expect("root");
    assert_eq!(*root.vertex(), addr(&[2]));

    // The old origin is one edge away, through local direction 0.
    let back = graph.find_frame(&addr(&[0])).expect("frame <0>");
    assert!(back.vertex().is_origin());
}

#[test]
fn test_recenter_skips_frames_across_the_seam() {
    let cases: [(&[u8], usize); 5] = [
        (&[0], 12),
        (&[1, 0], 4),
        (&[0, 1], 3),
        (&[2], 0),
        (&[3, 2, 1], 0),
    ];
    for (origin, skipped) in cases {
        let mut graph = default_graph();
        let report = graph
            .recenter(&addr(origin), &Isometry::identity())
            .expect("recenter");
        assert_eq!(report.frames_skipped, skipped, "origin {:?}", origin);
        assert_eq!(graph.frame_count(), 57 - skipped);
    }
}

#[test]
fn test_recenter_moves_attachments() {
    let mut graph = default_graph();
    graph
        .recenter(&addr(&[2]), &Isometry::identity())
        .expect("recenter");

    let vertex = graph.find_vertex(&addr(&[2])).expect("vertex");
    assert_eq!(vertex.attached_frame(), Some(&LatticeAddress::Origin));

    let attached = graph
        .vertices()
        .filter(|v| v.attached_frame().is_some())
        .count();
    assert_eq!(attached, graph.frame_count());
}

#[test]
fn test_recenter_rejects_invalid_origin() {
    let mut graph = default_graph();
    let result = graph.recenter(&addr(&[0, 2]), &Isometry::identity());
    assert!(matches!(result, Err(LatticeError::InvalidAddress(_))));
    assert!(graph.walker_origin().is_origin());
}

#[test]
fn test_regenerated_frames_agree_with_exact_edge_length() {
    let config = LatticeConfig::exact();
    let reference = LatticeGraph::new(config.clone()).expect("valid");

    let origins: [&[u8]; 5] = [&[2], &[3, 1], &[1, 0], &[4, 2, 1], &[0]];
    for origin in origins {
        let origin = addr(origin);
        let placement = *reference.find_frame(&origin).expect("frame").absolute();

        let mut moved = LatticeGraph::new(config.clone()).expect("valid");
        moved.recenter(&origin, &placement).expect("recenter");

        let mut shared = 0;
        for frame in moved.frames() {
            // Reference frames sit on their own address.
            let Some(original) = reference.find_frame(frame.vertex()) else {
                continue;
            };
            let here = frame.absolute().project_to_plane();
            let there = original.absolute().project_to_plane();
            assert!(
                (here.x - there.x).abs() < 1e-9 && (here.y - there.y).abs() < 1e-9,
                "vertex {} placed differently around {}",
                frame.vertex(),
                origin
            );
            shared += 1;
        }
        assert!(
            shared >= 6,
            "only {} shared vertices around {}",
            shared, origin
        );
    }
}
