//! Error types for lattice addressing, geometry and navigation.
//!
//! Classifying a digit sequence never fails: an out-of-range sequence is
//! simply the [`LatticeAddress::Invalid`] variant, because navigation passes
//! through such addresses transiently. Errors only surface where an
//! operation has to *materialise* or *step into* an invalid address, where
//! a lookup without growth misses, or where configuration and loop bounds
//! are violated.
//!
//! None of these conditions is fatal; every variant is an ordinary value the
//! caller is expected to inspect.

use thiserror::Error;

use crate::address::{Direction, LatticeAddress};

/// Result type alias for lattice operations.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Error type for all lattice operations.
#[derive(Error, Debug)]
pub enum LatticeError {
    // ========== Address Errors ==========
    /// Digit sequence violates the branch-radix rule and cannot back a
    /// vertex or frame.
    #[error("Invalid lattice address: {0}")]
    InvalidAddress(LatticeAddress),

    /// Text is not of the form `<d0,d1,...>`.
    #[error("Failed to parse lattice address: {0}")]
    AddressParse(String),

    // ========== Graph Errors ==========
    /// A rebase needs a vertex the graph has not generated yet.
    ///
    /// Recoverable: extend the seed (or call `rebase`, which grows the
    /// registry on demand) and retry.
    #[error("Neighbor of {anchor} in direction {direction} has not been generated")]
    UnresolvedNeighbor {
        anchor: LatticeAddress,
        direction: Direction,
    },

    /// No frame is registered at this walker-relative address.
    #[error("Frame not found: {0}")]
    FrameNotFound(LatticeAddress),

    /// A rebase loop kept finding nearer vertices past the configured bound.
    #[error("Rebase did not settle within {0} steps")]
    RebaseLimitExceeded(usize),

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Navigation script contains an unknown input symbol.
    #[error("Unknown navigation input {symbol:?} at position {position}")]
    UnknownInput { symbol: char, position: usize },

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ========== Error Conversions ==========

impl From<toml::de::Error> for LatticeError {
    fn from(err: toml::de::Error) -> Self {
        LatticeError::ConfigParse(err.to_string())
    }
}

impl LatticeError {
    /// Whether extending the seeded registries could make a retry succeed.
    pub fn is_recoverable_by_growth(&self) -> bool {
        matches!(self, LatticeError::UnresolvedNeighbor { .. })
    }
}
