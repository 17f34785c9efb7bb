//! Neighbor navigation over the canonical spanning tree.
//!
//! Only one path per vertex lives in the tree, so stepping "sideways"
//! (directions that leave the tree edge set) is expressed as digit carries
//! that land on the canonical path of the neighbor.

use super::types::{Direction, LatticeAddress, DIRECTIONS, ROOT_BRANCHES};
use crate::hyperbolic::direction_angle;

impl LatticeAddress {
    /// Address of the neighbor reached by leaving this vertex in `direction`
    /// (taken modulo 5).
    ///
    /// At the origin every direction is a child: `Origin.neighbor(d) == <d>`.
    /// Elsewhere direction 0 drops the last digit. Invalid addresses are
    /// returned unchanged.
    ///
    /// The result may classify as invalid near the seam of sector 0; callers
    /// treat such neighbors as unavailable.
    ///
    /// # Example
    /// ```
    /// use hyperlattice_graph::address::LatticeAddress;
    ///
    /// let two = LatticeAddress::origin().neighbor(2);
    /// assert_eq!(two.digits(), &[2]);
    /// assert!(two.neighbor(0).is_origin());
    ///
    /// // Carry across a full position.
    /// let addr = LatticeAddress::from_digits(vec![1, 2]);
    /// assert_eq!(addr.neighbor(4).digits(), &[2, 0, 0]);
    /// ```
    pub fn neighbor(&self, direction: Direction) -> LatticeAddress {
        let direction = direction % DIRECTIONS;
        let digits = match self {
            LatticeAddress::Invalid(_) => return self.clone(),
            LatticeAddress::Origin => vec![direction],
            LatticeAddress::Branch2(digits) => branch2_neighbor(digits, direction),
            LatticeAddress::Branch3(digits) => branch3_neighbor(digits, direction),
        };
        LatticeAddress::from_digits(digits)
    }

    /// Tree parent, `None` at the origin and for invalid addresses.
    pub fn parent(&self) -> Option<LatticeAddress> {
        if !self.is_valid() {
            return None;
        }
        let (_, rest) = self.digits().split_last()?;
        Some(LatticeAddress::from_digits(rest.to_vec()))
    }

    /// Local child index by which the tree parent refers to this address.
    ///
    /// Root children use their digit directly; below the root, three-way
    /// parents number their children 1..=3 and two-way parents 2..=3.
    pub fn leaf_direction(&self) -> Direction {
        let digits = self.digits();
        match digits {
            [] => 0,
            [only] => *only,
            [.., second_last, last] => {
                if digits.len() == 2 || *second_last != 0 {
                    last.wrapping_add(1)
                } else {
                    last.wrapping_add(2)
                }
            }
        }
    }

    /// Rotation (radians) of the tree edge from the parent to this address,
    /// in the parent's local frame.
    pub fn leaf_angle(&self) -> f64 {
        direction_angle(self.leaf_direction())
    }

    /// After stepping in `direction`, the local direction at the destination
    /// that points back here.
    ///
    /// Returns `None` for invalid addresses.
    pub fn direction_after_travel(&self, direction: Direction) -> Option<Direction> {
        let direction = direction % DIRECTIONS;
        match self {
            LatticeAddress::Invalid(_) => None,
            LatticeAddress::Origin => Some(0),
            _ if direction == 0 => Some(self.leaf_direction()),
            LatticeAddress::Branch2(_) => Some(match direction {
                1 => 4,
                4 => 1,
                _ => 0,
            }),
            LatticeAddress::Branch3(_) => Some(if direction == 4 { 1 } else { 0 }),
        }
    }

    /// Whether `direction` leads to a tree child of this address.
    pub fn is_child_direction(&self, direction: Direction) -> bool {
        let direction = direction % DIRECTIONS;
        match self {
            LatticeAddress::Origin => true,
            LatticeAddress::Branch3(_) => (1..=3).contains(&direction),
            LatticeAddress::Branch2(_) => (2..=3).contains(&direction),
            LatticeAddress::Invalid(_) => false,
        }
    }
}

/// Neighbor digits of a two-way branch (length >= 2, last digit 0).
fn branch2_neighbor(digits: &[u8], direction: Direction) -> Vec<u8> {
    let mut out = digits.to_vec();
    match direction {
        0 => {
            out.pop();
        }
        1 => {
            out.pop();
            let mut index = out.len() - 1;
            while out[index] == 0 && index > 0 {
                index -= 1;
            }
            let rooted = index == 0 || out[index] > 1;
            out[index] = (out[index] + ROOT_BRANCHES - 1) % ROOT_BRANCHES;
            if index + 1 < out.len() {
                out[index + 1] = if rooted { 2 } else { 1 };
                for digit in out.iter_mut().skip(index + 2) {
                    *digit = 2;
                }
            }
        }
        2 => out.push(0),
        3 => out.push(1),
        _ => {
            out.push(0);
            let second_last = out.len() - 2;
            out[second_last] = 1;
        }
    }
    out
}

/// Neighbor digits of a three-way branch (non-empty, not two-way).
fn branch3_neighbor(digits: &[u8], direction: Direction) -> Vec<u8> {
    let mut out = digits.to_vec();
    match direction {
        0 => {
            out.pop();
        }
        1..=3 => out.push(direction - 1),
        _ => {
            if let [only] = digits {
                return vec![(only + 1) % ROOT_BRANCHES, 0];
            }

            out.push(2);
            let mut index = out.len() - 1;
            while out[index] == 2 && index > 0 {
                out[index] = 0;
                index -= 1;
            }
            if index == 0 || out[index - 1] != 0 {
                out[index] = (out[index] + 1) % ROOT_BRANCHES;
            } else {
                out[index - 1] = 1;
                out[index] = 0;
            }
        }
    }
    out
}
