//! Address representation, classification and ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LatticeError;

/// Local direction index at a vertex, taken modulo [`DIRECTIONS`].
///
/// Direction 0 points toward the tree root; 1..=4 follow the vertex's local
/// numbering.
pub type Direction = u8;

/// Number of edges at every lattice vertex.
pub const DIRECTIONS: u8 = 5;

/// Number of children of the root.
pub const ROOT_BRANCHES: u8 = 5;

/// Classification of a digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// The empty path.
    Origin,
    /// Length >= 2 and last digit 0: two children.
    Branch2,
    /// Any other valid non-empty path: three children.
    Branch3,
    /// Violates the branch-radix rule.
    Invalid,
}

/// Digit payload of a non-origin address.
///
/// Only [`LatticeAddress::from_digits`] (and the conversions built on it)
/// can create one, so a variant always agrees with the classification of
/// its digits. Reads as a `[u8]` slice.
///
/// ```compile_fail
/// use hyperlattice_graph::address::{Digits, LatticeAddress};
///
/// let forged = LatticeAddress::Branch3(Digits(vec![0, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct Digits(Vec<u8>);

impl Digits {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Digits {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

/// Canonical digit path from the root to a lattice vertex.
///
/// Construct with [`LatticeAddress::from_digits`], which classifies the
/// sequence; the variants can be matched on but not built directly. Equality, hashing and ordering look only at the digits:
/// shorter paths precede longer ones and equal lengths compare
/// lexicographically.
///
/// # Example
/// ```
/// use hyperlattice_graph::address::{AddressKind, LatticeAddress};
///
/// let addr = LatticeAddress::from_digits(vec![2, 1, 0]);
/// assert_eq!(addr.kind(), AddressKind::Branch2);
/// assert_eq!(addr.to_string(), "<2,1,0>");
///
/// let bad = LatticeAddress::from_digits(vec![0, 2]);
/// assert!(!bad.is_valid());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", from = "Vec<u8>")]
pub enum LatticeAddress {
    #[default]
    Origin,
    Branch2(Digits),
    Branch3(Digits),
    Invalid(Digits),
}

impl LatticeAddress {
    /// Classify `digits` and wrap them in the matching variant.
    pub fn from_digits(digits: Vec<u8>) -> Self {
        match Self::classify(&digits) {
            AddressKind::Origin => LatticeAddress::Origin,
            AddressKind::Branch2 => LatticeAddress::Branch2(Digits(digits)),
            AddressKind::Branch3 => LatticeAddress::Branch3(Digits(digits)),
            AddressKind::Invalid => LatticeAddress::Invalid(Digits(digits)),
        }
    }

    /// Apply the branch-radix rule to a raw digit sequence.
    pub fn classify(digits: &[u8]) -> AddressKind {
        let Some(&last) = digits.last() else {
            return AddressKind::Origin;
        };

        let mut previous = None;
        for &digit in digits {
            if digit >= Self::branch_radix(previous) {
                return AddressKind::Invalid;
            }
            previous = Some(digit);
        }

        if digits.len() >= 2 && last == 0 {
            AddressKind::Branch2
        } else {
            AddressKind::Branch3
        }
    }

    /// Number of values a position may take given the digit before it
    /// (`None` for position 0).
    #[inline]
    pub fn branch_radix(previous: Option<u8>) -> u8 {
        match previous {
            None => ROOT_BRANCHES,
            Some(0) => 2,
            Some(_) => 3,
        }
    }

    /// The root address.
    #[inline]
    pub fn origin() -> Self {
        LatticeAddress::Origin
    }

    pub fn kind(&self) -> AddressKind {
        match self {
            LatticeAddress::Origin => AddressKind::Origin,
            LatticeAddress::Branch2(_) => AddressKind::Branch2,
            LatticeAddress::Branch3(_) => AddressKind::Branch3,
            LatticeAddress::Invalid(_) => AddressKind::Invalid,
        }
    }

    /// The digit path (empty for the origin).
    pub fn digits(&self) -> &[u8] {
        match self {
            LatticeAddress::Origin => &[],
            LatticeAddress::Branch2(d)
            | LatticeAddress::Branch3(d)
            | LatticeAddress::Invalid(d) => d.as_slice(),
        }
    }

    /// Path length, i.e. tree radius of the vertex.
    #[inline]
    pub fn depth(&self) -> usize {
        self.digits().len()
    }

    #[inline]
    pub fn is_origin(&self) -> bool {
        matches!(self, LatticeAddress::Origin)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, LatticeAddress::Invalid(_))
    }
}

impl From<Vec<u8>> for LatticeAddress {
    fn from(digits: Vec<u8>) -> Self {
        Self::from_digits(digits)
    }
}

impl From<LatticeAddress> for Vec<u8> {
    fn from(addr: LatticeAddress) -> Self {
        match addr {
            LatticeAddress::Origin => Vec::new(),
            LatticeAddress::Branch2(d)
            | LatticeAddress::Branch3(d)
            | LatticeAddress::Invalid(d) => d.0,
        }
    }
}

// ========== Ordering ==========

impl PartialEq for LatticeAddress {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}

impl Eq for LatticeAddress {}

impl Hash for LatticeAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits().hash(state);
    }
}

impl Ord for LatticeAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth()
            .cmp(&other.depth())
            .then_with(|| self.digits().cmp(other.digits()))
    }
}

impl PartialOrd for LatticeAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ========== Text Form ==========

impl fmt::Display for LatticeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, digit) in self.digits().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", digit)?;
        }
        f.write_str(">")
    }
}

impl FromStr for LatticeAddress {
    type Err = LatticeError;

    /// Parse the display form `<d0,d1,...>`; `<>` is the origin.
    ///
    /// Out-of-range digit sequences parse to [`LatticeAddress::Invalid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| {
                LatticeError::AddressParse(format!("expected <d0,d1,...>, got {:?}", s))
            })?;

        if inner.trim().is_empty() {
            return Ok(LatticeAddress::Origin);
        }

        let digits = inner
            .split(',')
            .map(|part| {
                part.trim().parse::<u8>().map_err(|e| {
                    LatticeError::AddressParse(format!("bad digit {:?} in {:?}: {}", part, s, e))
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self::from_digits(digits))
    }
}
