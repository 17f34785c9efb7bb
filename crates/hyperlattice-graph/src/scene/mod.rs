//! Renderer-facing snapshot of the current frame tree.
//!
//! The engine does not draw. A [`SceneSnapshot`] lists, for every frame,
//! where its vertex lands on the disc and on screen, plus the geodesic edge
//! polylines a renderer should stroke. It serialises to JSON for external
//! consumers.

use serde::Serialize;

use crate::address::{AddressKind, LatticeAddress};
use crate::graph::{Frame, LatticeGraph};
use crate::hyperbolic::{direction_angle, DiscPoint, HyperboloidPoint, Isometry};

/// Spacing of polyline samples along an edge.
pub const EDGE_SAMPLE_STEP: f64 = 0.3;

/// Marker radius at the disc centre is `MARKER_BASE_RADIUS * 1.5`.
pub const MARKER_BASE_RADIUS: f64 = 20.0;

/// One vertex as seen through its frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexMark {
    /// Walker-relative frame address.
    pub frame: LatticeAddress,
    pub vertex: LatticeAddress,
    /// Display form of the vertex address.
    pub label: String,
    pub kind: AddressKind,
    pub disc: DiscPoint,
    pub screen: [f64; 2],
    /// Shrinks toward the disc boundary: `20 * (1.5 - |disc|)`.
    pub radius: f64,
}

/// Sampled geodesic edge leaving a vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStroke {
    pub vertex: LatticeAddress,
    /// Embedded direction of the edge at `vertex`.
    pub direction: u8,
    /// Screen-space polyline from the vertex to its neighbor.
    pub points: Vec<[f64; 2]>,
}

/// Everything a renderer needs for one frame of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub walker_origin: LatticeAddress,
    pub display_scale: f64,
    pub marks: Vec<VertexMark>,
    pub edges: Vec<EdgeStroke>,
}

impl SceneSnapshot {
    /// Capture every valid frame of `graph`.
    ///
    /// Each non-origin vertex contributes the edge toward its tree parent
    /// (direction 0); two-way branch vertices also contribute direction 1,
    /// which no tree child covers. The origin vertex contributes nothing of
    /// its own; its edges are drawn by its neighbors.
    pub fn capture(graph: &LatticeGraph) -> Self {
        let config = graph.config();
        let scale = config.display_scale;
        let mut marks = Vec::new();
        let mut edges = Vec::new();

        for frame in graph.frames().filter(|f| f.is_valid()) {
            let vertex = frame.vertex();
            let kind = vertex.kind();
            if kind == AddressKind::Origin {
                continue;
            }

            let disc = frame.render().project_to_plane();
            marks.push(VertexMark {
                frame: frame.address().clone(),
                vertex: vertex.clone(),
                label: vertex.to_string(),
                kind,
                disc,
                screen: disc.to_screen(scale),
                radius: MARKER_BASE_RADIUS * (1.5 - disc.norm()),
            });

            edges.push(edge_stroke(frame, 0, config.branch_length, scale));
            if kind == AddressKind::Branch2 {
                edges.push(edge_stroke(frame, 1, config.branch_length, scale));
            }
        }

        Self {
            walker_origin: graph.walker_origin().clone(),
            display_scale: scale,
            marks,
            edges,
        }
    }
}

/// Sample the edge leaving `frame`'s vertex in embedded `direction`.
fn edge_stroke(frame: &Frame, direction: u8, length: f64, scale: f64) -> EdgeStroke {
    let mut placement: Isometry = *frame.render();
    placement.apply_rotation(direction_angle(direction));
    let matrix = placement.to_matrix();

    let project = |t: f64| {
        HyperboloidPoint::polar(t, 0.0)
            .transformed(&matrix)
            .to_disc()
            .to_screen(scale)
    };

    let samples = (length / EDGE_SAMPLE_STEP).ceil() as usize;
    let mut points: Vec<[f64; 2]> = (0..samples)
        .map(|i| project(i as f64 * EDGE_SAMPLE_STEP))
        .collect();
    points.push(project(length));

    EdgeStroke {
        vertex: frame.vertex().clone(),
        direction,
        points,
    }
}
