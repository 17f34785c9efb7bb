//! Vertex and frame records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::registry::Keyed;
use crate::address::{AddressKind, Direction, LatticeAddress};
use crate::hyperbolic::{direction_angle, Isometry};

/// Stable identity of a vertex, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A lattice vertex, identified one-to-one by its address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    id: VertexId,
    address: LatticeAddress,
    /// Walker-relative address of the frame currently pinned here.
    attached_frame: Option<LatticeAddress>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, address: LatticeAddress) -> Self {
        Self {
            id,
            address,
            attached_frame: None,
        }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn address(&self) -> &LatticeAddress {
        &self.address
    }

    #[inline]
    pub fn kind(&self) -> AddressKind {
        self.address.kind()
    }

    /// Frame pinned to this vertex, if any.
    pub fn attached_frame(&self) -> Option<&LatticeAddress> {
        self.attached_frame.as_ref()
    }

    pub(crate) fn attach(&mut self, frame: LatticeAddress) {
        self.attached_frame = Some(frame);
    }

    pub(crate) fn detach(&mut self) {
        self.attached_frame = None;
    }
}

impl Keyed for Vertex {
    fn key(&self) -> &LatticeAddress {
        &self.address
    }
}

/// A viewpoint pinned to one vertex.
///
/// `address` is relative to the walker origin; `vertex` is the absolute
/// address of the vertex it sits on. `direction_offset` converts the
/// frame's local direction numbering into the vertex's embedded numbering:
/// `embedded = (local + offset) mod 5`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    address: LatticeAddress,
    vertex: LatticeAddress,
    direction_offset: Direction,
    parent_offset: Isometry,
    absolute: Isometry,
    render: Isometry,
    valid: bool,
}

impl Frame {
    /// The walker origin frame, placed at `placement`.
    pub(crate) fn root(vertex: LatticeAddress, placement: Isometry) -> Self {
        Self {
            address: LatticeAddress::Origin,
            vertex,
            direction_offset: 0,
            parent_offset: Isometry::identity(),
            absolute: placement,
            render: placement,
            valid: true,
        }
    }

    /// A tree child whose parent sits at `parent_absolute`.
    pub(crate) fn child(
        address: LatticeAddress,
        vertex: LatticeAddress,
        direction_offset: Direction,
        branch_length: f64,
        parent_absolute: &Isometry,
    ) -> Self {
        let parent_offset = Isometry::edge(address.leaf_direction(), branch_length, 0);
        let mut frame = Self {
            address,
            vertex,
            direction_offset,
            parent_offset,
            absolute: parent_offset,
            render: parent_offset,
            valid: false,
        };
        frame.refresh(parent_absolute);
        frame
    }

    /// Recompute the cached placements from the parent's placement.
    pub(crate) fn refresh(&mut self, parent_absolute: &Isometry) {
        let mut absolute = self.parent_offset;
        absolute.preapply(parent_absolute);
        self.place(absolute);
    }

    /// Set the absolute placement and derive the render placement.
    pub(crate) fn place(&mut self, absolute: Isometry) {
        let mut render = absolute;
        render.apply_rotation(-direction_angle(self.direction_offset));
        self.absolute = absolute;
        self.render = render;
        self.valid = true;
    }

    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Walker-relative address.
    #[inline]
    pub fn address(&self) -> &LatticeAddress {
        &self.address
    }

    /// Absolute address of the vertex this frame sits on.
    #[inline]
    pub fn vertex(&self) -> &LatticeAddress {
        &self.vertex
    }

    #[inline]
    pub fn direction_offset(&self) -> Direction {
        self.direction_offset
    }

    /// Fixed isometry from the tree parent's placement to this one.
    #[inline]
    pub fn parent_offset(&self) -> &Isometry {
        &self.parent_offset
    }

    #[inline]
    pub fn absolute(&self) -> &Isometry {
        &self.absolute
    }

    /// Absolute placement rotated into the vertex's embedded numbering.
    #[inline]
    pub fn render(&self) -> &Isometry {
        &self.render
    }

    /// False between an invalidation and the next refresh.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Keyed for Frame {
    fn key(&self) -> &LatticeAddress {
        &self.address
    }
}

/// Registry growth caused by one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub vertices_created: usize,
    pub frames_created: usize,
    /// Frames not generated because their vertex address is invalid.
    pub frames_skipped: usize,
}
