//! Hyperboloid-model primitives.
//!
//! Points of the hyperbolic plane live on the upper sheet of
//! `t^2 - x^2 - y^2 = 1`. Isometries act on `(t, x, y)` as 3x3 matrices:
//! rotations about the reference point `(1, 0, 0)` mix `x` and `y`, the
//! z-axis translation boosts `(t, x)` and the y-axis translation boosts
//! `(t, y)`.

use serde::{Deserialize, Serialize};

/// Row-major 3x3 matrix acting on `(t, x, y)`.
pub type Mat3 = [[f64; 3]; 3];

/// Identity matrix.
pub const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Rotation by `angle` about the reference point.
pub fn rotation_matrix(angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]
}

/// Translation by `length` along the reference geodesic (boosts `t`, `x`).
pub fn translation_z_matrix(length: f64) -> Mat3 {
    let (c, s) = (length.cosh(), length.sinh());
    [[c, s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]
}

/// Translation by `length` along the perpendicular geodesic (boosts `t`, `y`).
pub fn translation_y_matrix(length: f64) -> Mat3 {
    let (c, s) = (length.cosh(), length.sinh());
    [[c, 0.0, s], [0.0, 1.0, 0.0], [s, 0.0, c]]
}

/// Matrix product `a * b`.
pub fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

/// Largest absolute entry-wise difference.
pub fn mat_max_diff(a: &Mat3, b: &Mat3) -> f64 {
    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// `acosh` clamped to 0 for round-off arguments at or below 1.
#[inline]
pub(crate) fn clamped_acosh(x: f64) -> f64 {
    if x <= 1.0 {
        0.0
    } else {
        x.acosh()
    }
}

/// Point on the hyperboloid sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperboloidPoint {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

impl HyperboloidPoint {
    /// The reference point `(1, 0, 0)`.
    pub const fn origin() -> Self {
        Self {
            t: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Point at geodesic distance `radius` from the reference point, in
    /// direction `angle`.
    pub fn polar(radius: f64, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let r = radius.sinh();
        Self {
            t: radius.cosh(),
            x: r * c,
            y: r * s,
        }
    }

    /// Image of this point under `matrix`.
    pub fn transformed(&self, matrix: &Mat3) -> Self {
        let v = [self.t, self.x, self.y];
        let row = |i: usize| matrix[i][0] * v[0] + matrix[i][1] * v[1] + matrix[i][2] * v[2];
        Self {
            t: row(0),
            x: row(1),
            y: row(2),
        }
    }

    /// Geodesic distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        clamped_acosh(self.t * other.t - self.x * other.x - self.y * other.y)
    }

    /// Poincare-disc projection `(x, y) / (t + 1)`.
    pub fn to_disc(&self) -> DiscPoint {
        let denom = self.t + 1.0;
        DiscPoint {
            x: self.x / denom,
            y: self.y / denom,
        }
    }
}

/// Point of the open unit (Poincare) disc.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscPoint {
    pub x: f64,
    pub y: f64,
}

impl DiscPoint {
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Screen coordinates: `p * scale + scale` per axis.
    pub fn to_screen(&self, scale: f64) -> [f64; 2] {
        [self.x * scale + scale, self.y * scale + scale]
    }
}
