//! Headless navigation session.
//!
//! A [`Navigator`] drives one [`AnchoredFrame`] through a [`LatticeGraph`]
//! the way an interactive loop does, one tick per input:
//!
//! 1. recenter the frame tree on the frame's anchor and placement;
//! 2. shift the anchor at most one step toward a nearer vertex;
//! 3. apply the input as a left move of `navigation_speed`;
//! 4. renormalize the relative isometry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::address::LatticeAddress;
use crate::anchor::AnchoredFrame;
use crate::config::LatticeConfig;
use crate::error::{LatticeError, LatticeResult};
use crate::graph::LatticeGraph;
use crate::hyperbolic::Isometry;
use crate::scene::SceneSnapshot;

/// One navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavInput {
    Forward,
    Backward,
    RotateLeft,
    RotateRight,
}

impl NavInput {
    /// Map a script symbol: `F`, `B`, `L`, `R` (any case) or `.` for an
    /// idle tick. Returns `None` for unknown symbols.
    pub fn from_symbol(symbol: char) -> Option<Option<NavInput>> {
        match symbol.to_ascii_uppercase() {
            'F' => Some(Some(NavInput::Forward)),
            'B' => Some(Some(NavInput::Backward)),
            'L' => Some(Some(NavInput::RotateLeft)),
            'R' => Some(Some(NavInput::RotateRight)),
            '.' => Some(None),
            _ => None,
        }
    }

    /// Apply this input to `relative` with step size `speed`.
    pub fn apply(self, relative: &mut Isometry, speed: f64) {
        match self {
            NavInput::Forward => relative.preapply_translation_y(speed),
            NavInput::Backward => relative.preapply_translation_y(-speed),
            NavInput::RotateLeft => relative.preapply_rotation(speed),
            NavInput::RotateRight => relative.preapply_rotation(-speed),
        }
    }
}

/// Parse a navigation script into one entry per tick. Whitespace is
/// ignored.
///
/// # Errors
/// `UnknownInput` with the character position of the first bad symbol.
///
/// # Example
/// ```
/// use hyperlattice_graph::navigator::{parse_script, NavInput};
///
/// let ticks = parse_script("FF. l").unwrap();
/// assert_eq!(ticks.len(), 4);
/// assert_eq!(ticks[2], None);
/// assert_eq!(ticks[3], Some(NavInput::RotateLeft));
/// ```
pub fn parse_script(script: &str) -> LatticeResult<Vec<Option<NavInput>>> {
    script
        .chars()
        .enumerate()
        .filter(|(_, symbol)| !symbol.is_whitespace())
        .map(|(position, symbol)| {
            NavInput::from_symbol(symbol)
                .ok_or(LatticeError::UnknownInput { symbol, position })
        })
        .collect()
}

/// A graph plus one anchored viewpoint, advanced tick by tick.
#[derive(Debug, Clone)]
pub struct Navigator {
    graph: LatticeGraph,
    frame: AnchoredFrame,
    speed: f64,
    ticks: u64,
}

impl Navigator {
    /// Start at the origin vertex with the identity placement.
    pub fn new(config: LatticeConfig) -> LatticeResult<Self> {
        let mut graph = LatticeGraph::new(config)?;
        let frame = AnchoredFrame::new(&mut graph, Isometry::identity(), LatticeAddress::Origin)?;
        let speed = graph.config().navigation_speed;
        Ok(Self {
            graph,
            frame,
            speed,
            ticks: 0,
        })
    }

    /// Advance one tick. Returns whether the anchor moved.
    pub fn tick(&mut self, input: Option<NavInput>) -> LatticeResult<bool> {
        self.graph.recenter_on(&self.frame)?;
        let shifted = self.frame.shift_toward_nearer(&mut self.graph)?;
        if let Some(input) = input {
            input.apply(self.frame.relative_mut(), self.speed);
        }
        self.frame.renormalize();
        self.ticks += 1;
        Ok(shifted)
    }

    /// Parse and run a whole script. Returns the number of anchor moves.
    pub fn run_script(&mut self, script: &str) -> LatticeResult<usize> {
        let inputs = parse_script(script)?;
        let mut moves = 0;
        for input in inputs {
            if self.tick(input)? {
                moves += 1;
            }
        }
        debug!(
            ticks = self.ticks,
            moves,
            anchor = %self.frame.anchor(),
            distance = self.frame.relative().translation_magnitude(),
            "Script finished"
        );
        Ok(moves)
    }

    /// Recenter on the current frame and capture the scene.
    pub fn snapshot(&mut self) -> LatticeResult<SceneSnapshot> {
        self.graph.recenter_on(&self.frame)?;
        Ok(SceneSnapshot::capture(&self.graph))
    }

    pub fn graph(&self) -> &LatticeGraph {
        &self.graph
    }

    pub fn frame(&self) -> &AnchoredFrame {
        &self.frame
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
