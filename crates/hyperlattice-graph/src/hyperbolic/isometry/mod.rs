//! Rotate-translate-rotate isometries.
//!
//! # Mathematics
//!
//! For `M = R(n) T(s) R(m)` and a move of length `l`, the new translation
//! follows the hyperbolic law of cosines
//!
//! `cosh s' = cosh l cosh s + cos(theta) sinh l sinh s`
//!
//! where `theta` is the angle between the move and the existing translation
//! (`m` for right moves, `n` for left moves, shifted by a quarter turn for
//! y-axis moves). The new rotations come from `atan2` of the transformed
//! axis.
//!
//! # Module Structure
//!
//! - `types`: the [`Isometry`] triple and constructors
//! - `operations`: moves, composition, inverse, distance and projection

mod operations;
mod types;

pub use self::operations::COLLAPSE_EPSILON;
pub use self::types::{direction_angle, Isometry};
