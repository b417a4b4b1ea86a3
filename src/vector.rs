//! 2D vector primitives
//!
//! Every force computation in the layout engine is expressed with these.
//! Vectors are plain values: all operations return a new vector.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// A point or displacement in the plane
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// The zero vector
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Create a vector from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale both components by `a`
    pub fn scale(self, a: f64) -> Self {
        Self::new(a * self.x, a * self.y)
    }

    /// Euclidean norm
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector pointing the same way as `self`
    ///
    /// Fails with [`LayoutError::DegenerateGeometry`] when the result would not
    /// be a finite unit vector: the zero vector, lengths so small that `1 / len`
    /// overflows, and infinite lengths.
    pub fn norm(self) -> LayoutResult<Self> {
        let len = self.length();
        let inv = 1.0 / len;
        if !inv.is_finite() {
            return Err(LayoutError::DegenerateGeometry(
                "cannot normalize a zero or vanishingly short vector",
            ));
        }
        if !len.is_finite() {
            return Err(LayoutError::DegenerateGeometry(
                "cannot normalize a vector of infinite length",
            ));
        }
        Ok(self.scale(inv))
    }

    /// Rotate counter-clockwise by `angle` radians
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Both components are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, a: f64) -> Vector {
        self.scale(a)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v.scale(self)
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::ZERO, |acc, v| acc + v)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn approx(a: Vector, b: Vector) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn samples() -> Vec<Vector> {
        vec![
            Vector::new(3.0, 4.0),
            Vector::new(-1.5, 2.25),
            Vector::new(0.0, -7.0),
            Vector::new(1e-3, 1e3),
            Vector::new(-123.456, -0.001),
        ]
    }

    #[test]
    fn add_and_sub_are_componentwise() {
        let u = Vector::new(1.0, 2.0);
        let v = Vector::new(3.0, -5.0);
        assert_eq!(u + v, Vector::new(4.0, -3.0));
        assert_eq!(u - v, Vector::new(-2.0, 7.0));
    }

    #[test]
    fn adding_the_difference_recovers_the_target() {
        for u in samples() {
            for v in samples() {
                assert!(approx(u + (v - u), v), "u={u:?} v={v:?}");
            }
        }
    }

    #[test]
    fn scale_identity_and_zero() {
        for v in samples() {
            assert_eq!(v.scale(1.0), v);
            assert_eq!(v.scale(0.0), Vector::ZERO);
            assert_eq!(2.0 * v, v * 2.0);
        }
    }

    #[test]
    fn length_of_known_vectors() {
        assert_eq!(Vector::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector::ZERO.length(), 0.0);
        assert_eq!(Vector::new(0.0, -2.0).length(), 2.0);
    }

    #[test]
    fn norm_has_unit_length() {
        for v in samples() {
            let n = v.norm().unwrap();
            assert!((n.length() - 1.0).abs() < EPS, "v={v:?}");
        }
        assert!(approx(Vector::new(3.0, 4.0).norm().unwrap(), Vector::new(0.6, 0.8)));
    }

    #[test]
    fn norm_of_zero_is_an_error() {
        assert!(matches!(
            Vector::ZERO.norm(),
            Err(LayoutError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn norm_of_subnormal_or_overflowing_vector_is_an_error() {
        for v in [
            Vector::new(1e-320, 0.0),
            Vector::new(0.0, -5e-324),
            Vector::new(f64::MAX, f64::MAX),
            Vector::new(f64::INFINITY, 1.0),
            Vector::new(f64::NAN, 1.0),
        ] {
            assert!(
                matches!(v.norm(), Err(LayoutError::DegenerateGeometry(_))),
                "v={v:?}"
            );
        }
        let tiny = Vector::new(1e-300, 0.0).norm().unwrap();
        assert!(approx(tiny, Vector::new(1.0, 0.0)));
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        for v in samples() {
            assert_eq!(v.rotate(0.0), v);
        }
    }

    #[test]
    fn rotate_twice_by_pi_returns_home() {
        for v in samples() {
            let back = v.rotate(PI).rotate(PI);
            assert!((back.x - v.x).abs() < 1e-6 && (back.y - v.y).abs() < 1e-6);
        }
    }

    #[test]
    fn rotate_quarter_turn_is_counter_clockwise() {
        assert!(approx(
            Vector::new(1.0, 0.0).rotate(FRAC_PI_2),
            Vector::new(0.0, 1.0)
        ));
    }

    #[test]
    fn sum_accumulates() {
        let total: Vector = samples().into_iter().take(3).sum();
        assert!(approx(total, Vector::new(1.5, -0.75)));
        let empty: Vector = Vec::<Vector>::new().into_iter().sum();
        assert_eq!(empty, Vector::ZERO);
    }

    #[test]
    fn serializes_as_xy_object() {
        let json = serde_json::to_string(&Vector::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    }
}
