//! Spring and electrostatic force model
//!
//! Both forces are parameterized by the optimum distance `d`:
//!
//! - Spring (attraction between neighbors): `d * ln(|v - u| / d)` along `v - u`.
//!   Logarithmic rather than Hookean, so it grows slowly when stretched and turns
//!   repulsive when the pair is closer than `d`.
//! - Repulsion (between every pair): `d / |u - v|` along `u - v`.
//!
//! Coincident positions have no defined direction. Both forces return
//! [`Vector::ZERO`] in that case, and also whenever the direction or the
//! magnitude is not finite (gaps too small to normalize, `d / r` overflowing).

use crate::vector::Vector;

/// Force on `u` pulling it toward `v`
pub fn spring_force(u: Vector, v: Vector, optimum_distance: f64) -> Vector {
    let delta = v - u;
    let Ok(direction) = delta.norm() else {
        return Vector::ZERO;
    };
    let magnitude = optimum_distance * (delta.length() / optimum_distance).ln();
    finite_or_zero(direction.scale(magnitude))
}

/// Force on `u` pushing it away from `v`
pub fn repulsion_force(u: Vector, v: Vector, optimum_distance: f64) -> Vector {
    let delta = u - v;
    let Ok(direction) = delta.norm() else {
        return Vector::ZERO;
    };
    let magnitude = optimum_distance / delta.length();
    finite_or_zero(direction.scale(magnitude))
}

fn finite_or_zero(force: Vector) -> Vector {
    if force.is_finite() { force } else { Vector::ZERO }
}
