//! 2D affine transforms.
//!
//! A `Transform` holds the six free coefficients of the 3×3 matrix
//!
//! ```text
//! | a  c  tx |
//! | b  d  ty |
//! | 0  0  1  |
//! ```
//!
//! and maps `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`. It is a plain
//! `Copy` value; composition always produces a new transform.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[must_use]
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `degrees`; positive angles turn +X toward +Y.
    #[must_use]
    pub fn rotate(degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Matrix product `a · b`: the result applies `b` first, then `a`.
    #[must_use]
    pub fn multiply(a: &Transform, b: &Transform) -> Self {
        Self {
            a: a.a * b.a + a.c * b.b,
            b: a.b * b.a + a.d * b.b,
            c: a.a * b.c + a.c * b.d,
            d: a.b * b.c + a.d * b.d,
            tx: a.a * b.tx + a.c * b.ty + a.tx,
            ty: a.b * b.tx + a.d * b.ty + a.ty,
        }
    }

    #[must_use]
    pub fn apply_to_point(&self, p: Point) -> Point {
        Point::new(self.a * p.x + self.c * p.y + self.tx, self.b * p.x + self.d * p.y + self.ty)
    }

    /// Like [`Transform::apply_to_point`] but ignores the translation column.
    #[must_use]
    pub fn apply_to_vector(&self, v: Point) -> Point {
        Point::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    #[must_use]
    pub fn translation(&self) -> Point {
        Point::new(self.tx, self.ty)
    }

    /// Same linear part, translation column replaced.
    #[must_use]
    pub fn with_translation(&self, tx: f64, ty: f64) -> Self {
        Self { tx, ty, ..*self }
    }

    /// Exact check that the linear part is the identity.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_translation_only(&self) -> bool {
        self.a == 1.0 && self.b == 0.0 && self.c == 0.0 && self.d == 1.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform::multiply(&self, &rhs)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}, {}, {}]", self.a, self.b, self.c, self.d, self.tx, self.ty)
    }
}
