//! Enumeration of every valid address of a fixed length.

use std::iter::FusedIterator;

use super::types::{LatticeAddress, ROOT_BRANCHES};

/// Yields every valid address of exactly `radius` digits in ascending
/// address order.
///
/// A mixed-radix counter: position 0 has radix 5, position `i > 0` radix 2
/// when digit `i - 1` is 0 and radix 3 otherwise. Finite and not
/// restartable.
///
/// # Example
/// ```
/// use hyperlattice_graph::address::AddressRingIterator;
///
/// assert_eq!(AddressRingIterator::new(0).count(), 1);
/// assert_eq!(AddressRingIterator::new(1).count(), 5);
/// assert_eq!(AddressRingIterator::new(2).count(), 14);
/// ```
#[derive(Debug, Clone)]
pub struct AddressRingIterator {
    counter: Vec<u8>,
    exhausted: bool,
}

impl AddressRingIterator {
    /// Start at the all-zero address of length `radius`.
    pub fn new(radius: usize) -> Self {
        Self {
            counter: vec![0; radius],
            exhausted: false,
        }
    }

    pub fn radius(&self) -> usize {
        self.counter.len()
    }

    /// Whether another address remains.
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Advance the counter; returns false once it wraps back to all zeros.
    fn advance(&mut self) -> bool {
        let Some(last) = self.counter.len().checked_sub(1) else {
            return false;
        };

        let mut index = last;
        loop {
            if index == 0 {
                self.counter[0] = (self.counter[0] + 1) % ROOT_BRANCHES;
                break;
            }
            let radix = LatticeAddress::branch_radix(Some(self.counter[index - 1]));
            if self.counter[index] + 1 < radix {
                self.counter[index] += 1;
                break;
            }
            self.counter[index] = 0;
            index -= 1;
        }

        self.counter.iter().any(|&digit| digit != 0)
    }
}

impl Iterator for AddressRingIterator {
    type Item = LatticeAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = LatticeAddress::from_digits(self.counter.clone());
        self.exhausted = !self.advance();
        Some(current)
    }
}

impl FusedIterator for AddressRingIterator {}

/// Every valid address of length `0..=radius`, ring by ring, in address
/// order.
pub fn addresses_within(radius: usize) -> impl Iterator<Item = LatticeAddress> {
    (0..=radius).flat_map(AddressRingIterator::new)
}
