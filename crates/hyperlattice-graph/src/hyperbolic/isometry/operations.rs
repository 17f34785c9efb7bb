//! Closed-form moves and group operations.
//!
//! Each move updates `(n, s, m)` in place. Right moves (`apply_*`) compose
//! on the right of the current isometry, left moves (`preapply_*`) on the
//! left.

use std::f64::consts::{PI, TAU};

use super::types::Isometry;
use crate::hyperbolic::hyperboloid::{
    clamped_acosh, mat_max_diff, mat_mul, rotation_matrix, translation_z_matrix, DiscPoint,
    HyperboloidPoint, Mat3,
};

/// Translations at or below this length collapse to a pure rotation.
pub const COLLAPSE_EPSILON: f64 = 1e-7;

/// Third side of the triangle with sides `l`, `s` enclosing an angle with
/// cosine `-cos_angle`: `acosh(cosh l cosh s + cos_angle sinh l sinh s)`.
///
/// Evaluated as `1 + 2 sinh^2((l + s) / 2) - (1 - cos_angle) sinh l sinh s`
/// so that exact cancellation yields exactly 0.
#[inline]
fn third_side(l: f64, s: f64, cos_angle: f64) -> f64 {
    let half = ((l + s) / 2.0).sinh();
    clamped_acosh(1.0 + 2.0 * half * half - (1.0 - cos_angle) * l.sinh() * s.sinh())
}

/// Wrap an angle into `(-pi, pi]`.
#[inline]
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

impl Isometry {
    /// Store a move result, collapsing a vanishing translation to the pure
    /// rotation `(n + m, 0, 0)` of the pre-move triple.
    #[inline]
    fn settle(&mut self, n: f64, s: f64, m: f64) {
        if s.abs() <= COLLAPSE_EPSILON {
            *self = Isometry::new(self.n + self.m, 0.0, 0.0);
        } else {
            *self = Isometry::new(n, s, m);
        }
    }

    // ========== Rotations ==========

    /// `self = self * R(angle)`.
    #[inline]
    pub fn apply_rotation(&mut self, angle: f64) {
        self.m += angle;
    }

    /// `self = R(angle) * self`.
    #[inline]
    pub fn preapply_rotation(&mut self, angle: f64) {
        self.n += angle;
    }

    // ========== Translations ==========

    /// `self = self * Tz(l)`: move along the current facing.
    pub fn apply_translation_z(&mut self, l: f64) {
        let Isometry { n, s, m } = *self;
        let (sn, cn) = n.sin_cos();
        let (sm, cm) = m.sin_cos();
        let (sh_s, ch_s) = (s.sinh(), s.cosh());
        let (sh_l, ch_l) = (l.sinh(), l.cosh());

        let new_n = ((cn * sm + cm * sn * ch_s) * sh_l + sn * sh_s * ch_l)
            .atan2((cm * cn * ch_s - sm * sn) * sh_l + cn * ch_l * sh_s);
        let new_s = third_side(l, s, cm);
        let new_m = (sm * sh_s).atan2(ch_s * sh_l + ch_l * sh_s * cm);

        self.settle(new_n, new_s, new_m);
    }

    /// `self = self * Ty(l)`: move perpendicular to the current facing.
    pub fn apply_translation_y(&mut self, l: f64) {
        let Isometry { n, s, m } = *self;
        let (sn, cn) = n.sin_cos();
        let (sm, cm) = m.sin_cos();
        let (sh_s, ch_s) = (s.sinh(), s.cosh());
        let (sh_l, ch_l) = (l.sinh(), l.cosh());

        let new_n = ((cn * cm - sm * sn * ch_s) * sh_l + sn * sh_s * ch_l)
            .atan2((-sm * cn * ch_s - cm * sn) * sh_l + cn * ch_l * sh_s);
        let new_s = third_side(l, s, -sm);
        let new_m = (-(ch_s * sh_l - ch_l * sh_s * sm)).atan2(cm * sh_s);

        self.settle(new_n, new_s, new_m);
    }

    /// `self = Tz(l) * self`: move the whole placement along the reference
    /// geodesic.
    pub fn preapply_translation_z(&mut self, l: f64) {
        let Isometry { n, s, m } = *self;
        let (sn, cn) = n.sin_cos();
        let (sm, cm) = m.sin_cos();
        let (sh_s, ch_s) = (s.sinh(), s.cosh());
        let (sh_l, ch_l) = (l.sinh(), l.cosh());

        let new_n = (sn * sh_s).atan2(ch_s * sh_l + cn * ch_l * sh_s);
        let new_s = third_side(l, s, cn);
        let new_m = (cm * sn * sh_l + sm * (cn * sh_l * ch_s + ch_l * sh_s))
            .atan2(cm * (cn * ch_s * sh_l + ch_l * sh_s) - sm * sn * sh_l);

        self.settle(new_n, new_s, new_m);
    }

    /// `self = Ty(l) * self`: move the whole placement along the
    /// perpendicular geodesic (forward/backward in the viewer).
    pub fn preapply_translation_y(&mut self, l: f64) {
        let Isometry { n, s, m } = *self;
        let (sn, cn) = n.sin_cos();
        let (sm, cm) = m.sin_cos();
        let (sh_s, ch_s) = (s.sinh(), s.cosh());
        let (sh_l, ch_l) = (l.sinh(), l.cosh());

        let new_n = (ch_s * sh_l + ch_l * sh_s * sn).atan2(cn * sh_s);
        let new_s = third_side(l, s, sn);
        let inner = ch_s * sh_l * sn + ch_l * sh_s;
        let new_m = (-cm * cn * sh_l + sm * inner).atan2(cn * sm * sh_l + cm * inner);

        self.settle(new_n, new_s, new_m);
    }

    // ========== Group Operations ==========

    /// `self = self * other`.
    pub fn compose_after(&mut self, other: &Isometry) {
        self.apply_rotation(other.n);
        self.apply_translation_z(other.s);
        self.apply_rotation(other.m);
    }

    /// `self = other * self`.
    pub fn preapply(&mut self, other: &Isometry) {
        self.preapply_rotation(other.m);
        self.preapply_translation_z(other.s);
        self.preapply_rotation(other.n);
    }

    /// `self * other`, leaving both untouched.
    #[must_use]
    pub fn compose(&self, other: &Isometry) -> Isometry {
        let mut out = *self;
        out.compose_after(other);
        out
    }

    /// `(n, s, m) -> (-m, -s, -n)`.
    #[must_use]
    pub fn inverse(&self) -> Isometry {
        Isometry::new(-self.m, -self.s, -self.n)
    }

    /// Translation magnitude of `self * other^-1`.
    ///
    /// Exactly 0 for `self`, and symmetric in its arguments.
    pub fn distance_to(&self, other: &Isometry) -> f64 {
        self.compose(&other.inverse()).translation_magnitude()
    }

    /// `|s|`: geodesic distance the isometry moves the reference point.
    #[inline]
    pub fn translation_magnitude(&self) -> f64 {
        self.s.abs()
    }

    // ========== Representation ==========

    /// Matrix `R(n) * Tz(s) * R(m)` acting on `(t, x, y)`.
    pub fn to_matrix(&self) -> Mat3 {
        mat_mul(
            &mat_mul(&rotation_matrix(self.n), &translation_z_matrix(self.s)),
            &rotation_matrix(self.m),
        )
    }

    /// Image of the reference point on the hyperboloid.
    pub fn position(&self) -> HyperboloidPoint {
        HyperboloidPoint::polar(self.s, self.n)
    }

    /// Image of the reference point projected into the Poincare disc.
    pub fn project_to_plane(&self) -> DiscPoint {
        self.position().to_disc()
    }

    /// Same isometry with `s >= 0` and both rotations in `(-pi, pi]`.
    #[must_use]
    pub fn normalized(&self) -> Isometry {
        let (n, s, m) = if self.s < 0.0 {
            (self.n + PI, -self.s, self.m + PI)
        } else {
            (self.n, self.s, self.m)
        };
        Isometry::new(wrap_angle(n), s, wrap_angle(m))
    }

    /// Whether both isometries act the same within `tolerance`, comparing
    /// matrices (the triple is not unique when `s == 0`).
    pub fn approx_eq(&self, other: &Isometry, tolerance: f64) -> bool {
        mat_max_diff(&self.to_matrix(), &other.to_matrix()) <= tolerance
    }
}
