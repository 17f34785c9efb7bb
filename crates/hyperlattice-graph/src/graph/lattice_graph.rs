//! LatticeGraph: lazy, memoized generation of vertices and frames.
//!
//! # Frame generation
//!
//! A non-origin frame hangs off its tree parent (the frame at
//! `address.parent()`):
//!
//! - its placement is the parent placement composed with the fixed edge
//!   isometry `(leaf_angle, branch_length, pi)`;
//! - its vertex is the parent's vertex stepped in the *embedded* direction
//!   `(leaf_direction + parent.direction_offset) mod 5`;
//! - its own offset is the return direction of that step.
//!
//! Missing ancestors are found by an iterative walk toward the origin and
//! then materialised top-down, so generation depth is never bounded by the
//! call stack.

use tracing::{debug, trace};

use super::registry::{Slot, SortedRegistry};
use super::types::{Frame, SeedReport, Vertex, VertexId};
use crate::address::{addresses_within, LatticeAddress, DIRECTIONS};
use crate::anchor::AnchoredFrame;
use crate::config::LatticeConfig;
use crate::error::{LatticeError, LatticeResult};
use crate::hyperbolic::Isometry;

/// Owner of the vertex and frame registries.
///
/// Single-threaded by construction: every operation takes `&mut self` and
/// runs to completion.
///
/// # Example
/// ```
/// use hyperlattice_graph::config::LatticeConfig;
/// use hyperlattice_graph::graph::LatticeGraph;
///
/// let graph = LatticeGraph::new(LatticeConfig::default()).unwrap();
/// assert_eq!(graph.frame_count(), 57);
/// assert!(graph.walker_origin().is_origin());
/// ```
#[derive(Debug, Clone)]
pub struct LatticeGraph {
    config: LatticeConfig,
    vertices: SortedRegistry<Vertex>,
    frames: SortedRegistry<Frame>,
    walker_origin: LatticeAddress,
    root_placement: Isometry,
    next_vertex_id: u32,
}

impl LatticeGraph {
    /// Validate `config`, pre-seed vertices to `vertex_radius` and generate
    /// the frame tree to `frame_radius` around the origin.
    pub fn new(config: LatticeConfig) -> LatticeResult<Self> {
        config.validate()?;

        let mut graph = Self {
            config,
            vertices: SortedRegistry::new(),
            frames: SortedRegistry::new(),
            walker_origin: LatticeAddress::Origin,
            root_placement: Isometry::identity(),
            next_vertex_id: 0,
        };

        graph.seed_vertices(graph.config.vertex_radius)?;
        let report = graph.seed(graph.config.frame_radius)?;

        debug!(
            vertices = graph.vertex_count(),
            frames = graph.frame_count(),
            skipped = report.frames_skipped,
            "Lattice graph initialised"
        );

        Ok(graph)
    }

    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Absolute address the frame tree is rooted at.
    #[inline]
    pub fn walker_origin(&self) -> &LatticeAddress {
        &self.walker_origin
    }

    /// Placement of the root frame.
    #[inline]
    pub fn root_placement(&self) -> &Isometry {
        &self.root_placement
    }

    // ========== Vertices ==========

    /// Return the vertex at `address`, creating it on first demand.
    ///
    /// Repeated calls with equal addresses return the same vertex identity.
    ///
    /// # Errors
    /// `InvalidAddress` when `address` violates the branch-radix rule.
    pub fn get_or_create_vertex(&mut self, address: &LatticeAddress) -> LatticeResult<&Vertex> {
        if !address.is_valid() {
            return Err(LatticeError::InvalidAddress(address.clone()));
        }

        match self.vertices.locate(address) {
            Slot::Occupied(index) => Ok(self.vertices.at(index)),
            Slot::Vacant(index) => {
                let id = VertexId(self.next_vertex_id);
                self.next_vertex_id += 1;
                trace!(%address, %id, "Vertex created");
                let vertex = self
                    .vertices
                    .insert_at(index, Vertex::new(id, address.clone()));
                Ok(&*vertex)
            }
        }
    }

    /// Lookup without growth.
    pub fn find_vertex(&self, address: &LatticeAddress) -> Option<&Vertex> {
        self.vertices.get(address)
    }

    /// Create every vertex of length `0..=radius`. Returns how many were new.
    pub fn seed_vertices(&mut self, radius: usize) -> LatticeResult<usize> {
        let before = self.vertices.len();
        for address in addresses_within(radius) {
            self.get_or_create_vertex(&address)?;
        }
        Ok(self.vertices.len() - before)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in address order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    // ========== Frames ==========

    /// Return the frame at walker-relative `address`, generating it and any
    /// missing ancestors on first demand. Invalidated frames on the path are
    /// refreshed.
    ///
    /// # Errors
    /// `InvalidAddress` when `address` itself, or the vertex it would sit
    /// on, is invalid. Ancestors generated before the failure are kept.
    pub fn get_or_create_frame(&mut self, address: &LatticeAddress) -> LatticeResult<&Frame> {
        if !address.is_valid() {
            return Err(LatticeError::InvalidAddress(address.clone()));
        }

        // Walk toward the origin until a usable frame is found.
        let mut pending = Vec::new();
        let mut cursor = address.clone();
        loop {
            match self.frames.locate(&cursor) {
                Slot::Occupied(index) if self.frames.at(index).is_valid() => break,
                _ => {}
            }
            let parent = cursor.parent();
            pending.push(cursor);
            match parent {
                Some(parent) => cursor = parent,
                None => break,
            }
        }

        while let Some(next) = pending.pop() {
            self.materialize_frame(next)?;
        }

        match self.frames.locate(address) {
            Slot::Occupied(index) => Ok(self.frames.at(index)),
            Slot::Vacant(_) => Err(LatticeError::FrameNotFound(address.clone())),
        }
    }

    /// Create or refresh one frame whose parent is already valid.
    fn materialize_frame(&mut self, address: LatticeAddress) -> LatticeResult<()> {
        let Some(parent_address) = address.parent() else {
            return self.install_root();
        };

        let (parent_vertex, parent_offset, parent_absolute) = {
            let parent = self
                .frames
                .get(&parent_address)
                .ok_or_else(|| LatticeError::FrameNotFound(parent_address.clone()))?;
            (
                parent.vertex().clone(),
                parent.direction_offset(),
                *parent.absolute(),
            )
        };

        let index = match self.frames.locate(&address) {
            Slot::Occupied(index) => {
                self.frames.at_mut(index).refresh(&parent_absolute);
                return Ok(());
            }
            Slot::Vacant(index) => index,
        };

        let embedded = (address.leaf_direction() + parent_offset) % DIRECTIONS;
        let vertex_address = parent_vertex.neighbor(embedded);
        let direction_offset = parent_vertex
            .direction_after_travel(embedded)
            .ok_or_else(|| LatticeError::InvalidAddress(parent_vertex.clone()))?;
        self.get_or_create_vertex(&vertex_address)?;

        let frame = Frame::child(
            address.clone(),
            vertex_address.clone(),
            direction_offset,
            self.config.branch_length,
            &parent_absolute,
        );
        self.frames.insert_at(index, frame);
        self.attach(&vertex_address, &address);

        trace!(frame = %address, vertex = %vertex_address, direction_offset, "Frame created");
        Ok(())
    }

    /// (Re)install the origin frame on the walker-origin vertex.
    fn install_root(&mut self) -> LatticeResult<()> {
        let origin = self.walker_origin.clone();
        self.get_or_create_vertex(&origin)?;

        match self.frames.locate(&LatticeAddress::Origin) {
            Slot::Occupied(index) => self.frames.at_mut(index).place(self.root_placement),
            Slot::Vacant(index) => {
                self.frames
                    .insert_at(index, Frame::root(origin.clone(), self.root_placement));
            }
        }
        self.attach(&origin, &LatticeAddress::Origin);
        Ok(())
    }

    fn attach(&mut self, vertex: &LatticeAddress, frame: &LatticeAddress) {
        if let Some(vertex) = self.vertices.get_mut(vertex) {
            vertex.attach(frame.clone());
        }
    }

    /// Generate every frame of walker-relative length `0..=radius`.
    ///
    /// The origin frame is (re)installed first when missing. Frames whose
    /// vertex address is invalid are skipped together with their subtrees
    /// and counted in the report.
    pub fn seed(&mut self, radius: usize) -> LatticeResult<SeedReport> {
        let vertices_before = self.vertices.len();
        let frames_before = self.frames.len();
        let mut frames_skipped = 0;

        for address in addresses_within(radius) {
            match self.get_or_create_frame(&address) {
                Ok(_) => {}
                Err(LatticeError::InvalidAddress(vertex)) => {
                    trace!(frame = %address, %vertex, "Frame skipped: vertex address invalid");
                    frames_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let report = SeedReport {
            vertices_created: self.vertices.len() - vertices_before,
            frames_created: self.frames.len() - frames_before,
            frames_skipped,
        };
        debug!(
            radius,
            origin = %self.walker_origin,
            vertices_created = report.vertices_created,
            frames_created = report.frames_created,
            frames_skipped,
            "Frame tree seeded"
        );
        Ok(report)
    }

    /// Lookup without growth.
    pub fn find_frame(&self, address: &LatticeAddress) -> Option<&Frame> {
        self.frames.get(address)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frames in walker-relative address order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.frames.iter()
    }

    // ========== Recentering ==========

    /// Root the frame tree at vertex `origin`, placed at `placement`.
    ///
    /// When `origin` is already the walker origin the tree topology is kept
    /// and only placements are recomputed. Otherwise every frame address
    /// changes meaning, so the frame registry is discarded and reseeded to
    /// `frame_radius`.
    pub fn recenter(
        &mut self,
        origin: &LatticeAddress,
        placement: &Isometry,
    ) -> LatticeResult<SeedReport> {
        if !origin.is_valid() {
            return Err(LatticeError::InvalidAddress(origin.clone()));
        }

        self.root_placement = *placement;

        if *origin == self.walker_origin {
            for frame in self.frames.iter_mut() {
                frame.invalidate();
            }
            self.revalidate_frames()?;
            trace!(origin = %origin, frames = self.frames.len(), "Frame placements refreshed");
            return Ok(SeedReport::default());
        }

        for vertex in self.vertices.iter_mut() {
            vertex.detach();
        }
        self.frames.clear();
        self.walker_origin = origin.clone();

        debug!(origin = %origin, "Walker origin moved, regenerating frames");
        self.seed(self.config.frame_radius)
    }

    /// Recenter on an anchored frame's anchor and relative placement.
    pub fn recenter_on(&mut self, frame: &AnchoredFrame) -> LatticeResult<SeedReport> {
        self.recenter(frame.anchor(), frame.relative())
    }

    /// Refresh invalidated frames in address order; parents precede
    /// children, so each parent is already valid when its child is reached.
    fn revalidate_frames(&mut self) -> LatticeResult<()> {
        for index in 0..self.frames.len() {
            if self.frames.at(index).is_valid() {
                continue;
            }
            let parent_address = match self.frames.at(index).address().parent() {
                Some(parent) => parent,
                None => {
                    let placement = self.root_placement;
                    self.frames.at_mut(index).place(placement);
                    continue;
                }
            };
            let parent_absolute = *self
                .frames
                .get(&parent_address)
                .ok_or_else(|| LatticeError::FrameNotFound(parent_address.clone()))?
                .absolute();
            self.frames.at_mut(index).refresh(&parent_absolute);
        }
        Ok(())
    }
}
