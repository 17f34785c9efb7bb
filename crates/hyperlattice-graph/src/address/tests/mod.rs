//! Tests for lattice addressing.


use super::LatticeAddress;

/// Shorthand used throughout the address tests.
pub(super) fn addr(digits: &[u8]) -> LatticeAddress {
    LatticeAddress::from_digits(digits.to_vec())
}
