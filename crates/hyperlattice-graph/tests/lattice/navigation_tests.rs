//! Stepping and rebasing through the public API.

use hyperlattice_graph::{AnchoredFrame, Isometry, LatticeAddress, LatticeError};

use crate::common::{addr, default_graph};

#[test]
fn test_step_out_and_back_returns_home() {
    println!("\n=== TEST: Step Out and Back ===");
    let mut graph = default_graph();
    let mut frame = AnchoredFrame::new(&mut graph, Isometry::identity(), LatticeAddress::Origin)
        .expect("valid");

    frame.step(&mut graph, 2).expect("step 2");
    assert_eq!(*frame.anchor(), addr(&[2]));
    frame.step(&mut graph, 0).expect("step 0");

    assert!(frame.anchor().is_origin());
    let relative = frame.relative();
    println!("  relative after round trip: {:?}", relative);
    assert!(relative.approx_eq(&Isometry::identity(), 1e-9));
    assert!(relative.normalized().s.abs() < 1e-9);
}

#[test]
fn test_rebase_never_increases_distance() {
    let starts = [
        (0.0, 1.0, 0.0),
        (0.5, 2.0, 0.3),
        (2.0, 3.0, -1.0),
        (4.0, 5.0, 1.0),
        (1.0, 0.7, 0.0),
        (-2.5, 4.2, 0.9),
    ];
    for (n, s, m) in starts {
        let mut graph = default_graph();
        let mut frame =
            AnchoredFrame::new(&mut graph, Isometry::new(n, s, m), LatticeAddress::Origin)
                .expect("valid");

        let mut last = frame.relative().translation_magnitude();
        while frame.shift_toward_nearer(&mut graph).expect("shift") {
            let now = frame.relative().translation_magnitude();
            assert!(now < last, "distance grew from {} to {}", last, now);
            last = now;
        }
        assert!(
            last < graph.config().branch_length,
            "start ({}, {}, {})",
            n, s, m
        );
    }
}

#[test]
fn test_try_rebase_then_grow() {
    println!("\n=== TEST: try_rebase Reports Missing Vertices ===");
    let mut graph = default_graph();
    let mut frame = AnchoredFrame::new(
        &mut graph,
        Isometry::new(4.0, 5.0, 1.0),
        LatticeAddress::Origin,
    )
    .expect("valid");

    let mut rounds = 0;
    loop {
        match frame.try_rebase(&graph) {
            Ok(_) => break,
            Err(LatticeError::UnresolvedNeighbor { anchor, direction }) => {
                println!(
                    "  missing neighbor of {} in direction {}",
                    anchor, direction
                );
                let depth = anchor.depth() + 1;
                graph.seed_vertices(depth).expect("grow");
                rounds += 1;
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
        assert!(rounds < 10);
    }

    assert!(rounds > 0);
    assert_eq!(*frame.anchor(), addr(&[2, 1, 1, 0, 0, 0]));
}

#[test]
fn test_apply_isometry_matches_rebase() {
    let mut graph = default_graph();
    let mut moved = AnchoredFrame::new(&mut graph, Isometry::identity(), LatticeAddress::Origin)
        .expect("valid");
    moved
        .apply_isometry(&mut graph, &Isometry::new(2.0, 3.0, -1.0))
        .expect("apply");
    assert_eq!(*moved.anchor(), addr(&[4, 0, 0]));
}
