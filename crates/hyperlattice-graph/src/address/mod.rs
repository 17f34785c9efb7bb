//! Canonical tree-path addressing of the order-5 vertex lattice.
//!
//! Every vertex of the tessellation is named by the digit path leading to it
//! from a chosen root through a canonical spanning tree. The root has five
//! children; below it a position may take two values when the preceding
//! digit is 0 and three values otherwise. The kind of an address (origin,
//! two-way branch, three-way branch or invalid) is a pure function of its
//! digits and is carried as the enum variant.
//!
//! # Components
//!
//! - [`LatticeAddress`]: the tagged address type with its total order
//! - Navigation: [`LatticeAddress::neighbor`] and its rotational bookkeeping
//! - [`AddressRingIterator`]: every valid address of a fixed length, in order

mod navigation;
mod ring;
mod types;

pub use ring::{addresses_within, AddressRingIterator};
pub use types::{AddressKind, Digits, Direction, LatticeAddress, DIRECTIONS, ROOT_BRANCHES};

#[cfg(test)]
mod tests;
