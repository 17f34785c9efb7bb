//! Lazily generated vertex and frame registries.
//!
//! A [`LatticeGraph`] owns two registries sorted by address order:
//!
//! - **Vertices**, keyed by their absolute lattice address. Created on first
//!   demand and kept for the graph's lifetime.
//! - **Frames**, keyed by an address relative to the current walker origin.
//!   Each frame pins one vertex to a placement isometry. The whole frame
//!   registry is rebuilt whenever the walker origin moves.
//!
//! # Module Structure
//!
//! - `types`: [`Vertex`], [`Frame`] and [`SeedReport`]
//! - `registry`: sorted storage with find-or-insertion-point lookup
//! - `lattice_graph`: generation, seeding and recentering

mod lattice_graph;
mod registry;
mod types;

pub use self::lattice_graph::LatticeGraph;
pub use self::types::{Frame, SeedReport, Vertex, VertexId};

#[cfg(test)]
mod tests;
