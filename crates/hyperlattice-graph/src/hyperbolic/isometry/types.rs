//! Isometry triple.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::address::{Direction, DIRECTIONS};

/// Isometry of the hyperbolic plane, `R(n) * T(s) * R(m)`.
///
/// `n` is the initial rotation, `s` the translation length along the
/// reference geodesic and `m` the final rotation. Any real values are
/// allowed, including negative `s`.
///
/// # Example
/// ```
/// use hyperlattice_graph::hyperbolic::Isometry;
///
/// let x = Isometry::new(0.3, 1.1, -0.7);
/// let y = Isometry::new(2.5, -0.8, 1.9);
/// let back = x.compose(&y).compose(&y.inverse());
/// assert!(back.approx_eq(&x, 1e-9));
/// assert_eq!(x.distance_to(&x), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Isometry {
    pub n: f64,
    pub s: f64,
    pub m: f64,
}

impl Isometry {
    pub const fn new(n: f64, s: f64, m: f64) -> Self {
        Self { n, s, m }
    }

    /// The identity `(0, 0, 0)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Pure rotation about the reference point.
    pub const fn rotation(angle: f64) -> Self {
        Self::new(angle, 0.0, 0.0)
    }

    /// Pure translation along the reference geodesic.
    pub const fn translation(length: f64) -> Self {
        Self::new(0.0, length, 0.0)
    }

    /// Isometry of one lattice edge: turn to `direction`, cross an edge of
    /// `branch_length`, then face back along it rotated by `turn` further
    /// directions.
    ///
    /// `Isometry::edge(d, l, 0)` is the plain edge `(d * 2pi/5, l, pi)`.
    pub fn edge(direction: Direction, branch_length: f64, turn: Direction) -> Self {
        Self::new(
            direction_angle(direction),
            branch_length,
            PI - direction_angle(turn),
        )
    }
}

/// Angle of a local direction, `d * 2pi / 5`.
#[inline]
pub fn direction_angle(direction: Direction) -> f64 {
    f64::from(direction) * 2.0 * PI / f64::from(DIRECTIONS)
}
