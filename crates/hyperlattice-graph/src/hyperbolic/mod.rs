//! Hyperbolic-plane geometry for lattice placement.
//!
//! # Model
//!
//! Positions are handled on the hyperboloid `t^2 - x^2 - y^2 = 1`, and
//! every placement is an isometry in rotate-translate-rotate form
//! `R(n) * T(s) * R(m)`. Composition is carried out on the three scalars
//! through closed-form identities of the hyperbolic law of cosines, so long
//! chains never accumulate matrix drift.
//!
//! # Module Structure
//!
//! - `hyperboloid`: matrices, hyperboloid points and disc projection
//! - `isometry`: the [`Isometry`] group element and its moves

pub mod hyperboloid;
mod isometry;

pub use self::hyperboloid::{DiscPoint, HyperboloidPoint, Mat3};
pub use self::isometry::{direction_angle, Isometry, COLLAPSE_EPSILON};
