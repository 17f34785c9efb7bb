//! Configuration types for the lattice engine.
//!
//! The core geometry consumes exactly two scalars from its environment:
//! the edge (branch) length of the tessellation and the display scale used
//! when projecting onto the screen. The remaining fields bound how much of
//! the lattice is generated up front and how the navigation loop behaves.

mod lattice;

pub use self::lattice::LatticeConfig;

#[cfg(test)]
mod tests;
