//! AnchoredFrame: relative isometry plus anchor vertex.

use tracing::{debug, trace};

use crate::address::{Direction, LatticeAddress, DIRECTIONS};
use crate::error::{LatticeError, LatticeResult};
use crate::graph::{LatticeGraph, VertexId};
use crate::hyperbolic::Isometry;

/// A free isometry coupled to the vertex it is anchored near.
///
/// The relative isometry places the anchor vertex in the viewer's frame;
/// its translation magnitude is the viewer's distance from the anchor.
/// The graph is passed to every operation that may touch the registries.
///
/// # Example
/// ```
/// use hyperlattice_graph::anchor::AnchoredFrame;
/// use hyperlattice_graph::address::LatticeAddress;
/// use hyperlattice_graph::config::LatticeConfig;
/// use hyperlattice_graph::graph::LatticeGraph;
/// use hyperlattice_graph::hyperbolic::Isometry;
///
/// let mut graph = LatticeGraph::new(LatticeConfig::default()).unwrap();
/// let mut frame =
///     AnchoredFrame::new(&mut graph, Isometry::identity(), LatticeAddress::Origin).unwrap();
///
/// frame.step(&mut graph, 2).unwrap();
/// frame.step(&mut graph, 0).unwrap();
/// assert!(frame.anchor().is_origin());
/// assert!(frame.relative().approx_eq(&Isometry::identity(), 1e-9));
/// ```
#[derive(Debug, Clone)]
pub struct AnchoredFrame {
    relative: Isometry,
    anchor: LatticeAddress,
    anchor_id: VertexId,
    branch_length: f64,
    max_steps: usize,
}

impl AnchoredFrame {
    /// Anchor `relative` at vertex `anchor`, creating the vertex if needed.
    ///
    /// # Errors
    /// `InvalidAddress` when `anchor` is invalid.
    pub fn new(
        graph: &mut LatticeGraph,
        relative: Isometry,
        anchor: LatticeAddress,
    ) -> LatticeResult<Self> {
        let anchor_id = graph.get_or_create_vertex(&anchor)?.id();
        Ok(Self {
            relative,
            anchor,
            anchor_id,
            branch_length: graph.config().branch_length,
            max_steps: graph.config().max_rebase_steps,
        })
    }

    #[inline]
    pub fn relative(&self) -> &Isometry {
        &self.relative
    }

    /// Mutable access for input-driven moves. Call [`Self::rebase`] or
    /// [`Self::shift_toward_nearer`] afterwards to keep the anchor near.
    #[inline]
    pub fn relative_mut(&mut self) -> &mut Isometry {
        &mut self.relative
    }

    #[inline]
    pub fn anchor(&self) -> &LatticeAddress {
        &self.anchor
    }

    #[inline]
    pub fn anchor_id(&self) -> VertexId {
        self.anchor_id
    }

    /// Replace the relative isometry by its normalized form.
    pub fn renormalize(&mut self) {
        self.relative = self.relative.normalized();
    }

    /// Relative isometry the neighbor in `direction` would have. A probe;
    /// nothing is committed.
    pub fn neighbor_offset(&self, direction: Direction) -> Isometry {
        self.relative
            .compose(&Isometry::edge(direction, self.branch_length, 0))
    }

    /// Move the anchor to its neighbor in `direction`, creating the vertex
    /// if needed, and re-express the relative isometry from there.
    ///
    /// # Errors
    /// `InvalidAddress` when the neighbor address is invalid; the frame is
    /// left unchanged.
    pub fn step(&mut self, graph: &mut LatticeGraph, direction: Direction) -> LatticeResult<()> {
        let (next, turn) = self.plan_step(direction)?;
        let id = graph.get_or_create_vertex(&next)?.id();
        self.commit_step(direction, next, id, turn);
        Ok(())
    }

    /// Neighbor address and return direction of a step.
    fn plan_step(&self, direction: Direction) -> LatticeResult<(LatticeAddress, Direction)> {
        let next = self.anchor.neighbor(direction);
        if !next.is_valid() {
            return Err(LatticeError::InvalidAddress(next));
        }
        let turn = self
            .anchor
            .direction_after_travel(direction)
            .ok_or_else(|| LatticeError::InvalidAddress(self.anchor.clone()))?;
        Ok((next, turn))
    }

    fn commit_step(
        &mut self,
        direction: Direction,
        next: LatticeAddress,
        id: VertexId,
        turn: Direction,
    ) {
        self.relative
            .compose_after(&Isometry::edge(direction, self.branch_length, turn));
        trace!(
            from = %self.anchor,
            to = %next,
            direction,
            distance = self.relative.translation_magnitude(),
            "Anchor stepped"
        );
        self.anchor = next;
        self.anchor_id = id;
    }

    /// First direction whose neighbor is valid and strictly nearer than the
    /// anchor.
    fn nearer_direction(&self) -> Option<Direction> {
        let current = self.relative.translation_magnitude();
        (0..DIRECTIONS).find(|&direction| {
            self.anchor.neighbor(direction).is_valid()
                && self.neighbor_offset(direction).translation_magnitude() < current
        })
    }

    /// Step toward a nearer neighbor until none is nearer. Returns the
    /// number of steps taken.
    ///
    /// The translation magnitude never increases. The result is a local
    /// minimum, not necessarily the globally nearest vertex.
    ///
    /// # Errors
    /// `RebaseLimitExceeded` after `max_rebase_steps` steps.
    pub fn rebase(&mut self, graph: &mut LatticeGraph) -> LatticeResult<usize> {
        let mut steps = 0;
        while let Some(direction) = self.nearer_direction() {
            if steps >= self.max_steps {
                return Err(LatticeError::RebaseLimitExceeded(self.max_steps));
            }
            self.step(graph, direction)?;
            steps += 1;
        }
        if steps > 0 {
            debug!(anchor = %self.anchor, steps, "Rebased");
        }
        Ok(steps)
    }

    /// Like [`Self::rebase`], but never grows the graph.
    ///
    /// # Errors
    /// `UnresolvedNeighbor` as soon as the nearer neighbor has not been
    /// generated. Steps taken before that stay committed, so the caller can
    /// extend the seed and continue.
    pub fn try_rebase(&mut self, graph: &LatticeGraph) -> LatticeResult<usize> {
        let mut steps = 0;
        while let Some(direction) = self.nearer_direction() {
            if steps >= self.max_steps {
                return Err(LatticeError::RebaseLimitExceeded(self.max_steps));
            }
            let (next, turn) = self.plan_step(direction)?;
            let Some(vertex) = graph.find_vertex(&next) else {
                debug!(
                    anchor = %self.anchor,
                    direction,
                    steps,
                    "Rebase needs an ungenerated vertex"
                );
                return Err(LatticeError::UnresolvedNeighbor {
                    anchor: self.anchor.clone(),
                    direction,
                });
            };
            let id = vertex.id();
            self.commit_step(direction, next, id, turn);
            steps += 1;
        }
        Ok(steps)
    }

    /// Take at most one improving step. Returns whether a step was taken.
    pub fn shift_toward_nearer(&mut self, graph: &mut LatticeGraph) -> LatticeResult<bool> {
        match self.nearer_direction() {
            Some(direction) => {
                self.step(graph, direction)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Compose `motion` onto the relative isometry, then [`Self::rebase`].
    pub fn apply_isometry(
        &mut self,
        graph: &mut LatticeGraph,
        motion: &Isometry,
    ) -> LatticeResult<usize> {
        self.relative.compose_after(motion);
        self.rebase(graph)
    }

    /// Compose `motion` onto the relative isometry, then
    /// [`Self::try_rebase`].
    pub fn try_apply_isometry(
        &mut self,
        graph: &LatticeGraph,
        motion: &Isometry,
    ) -> LatticeResult<usize> {
        self.relative.compose_after(motion);
        self.try_rebase(graph)
    }
}
