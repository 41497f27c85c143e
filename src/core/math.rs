//! Mathematical primitives for 2D localization.
//!
//! Functions for angle wrapping and angular arithmetic. Headings throughout
//! the crate live in the half-open interval [0, 2π).

use std::f32::consts::{PI, TAU};

/// Wrap angle to [0, 2π).
///
/// Negative remainders are shifted up by one full turn.
///
/// # Example
/// ```
/// use disha_nav::core::math::wrap_angle;
/// use std::f32::consts::{PI, TAU};
///
/// assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-6);
/// assert!((wrap_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-6);
/// assert_eq!(wrap_angle(TAU), 0.0);
/// ```
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    // Rounding of a tiny negative remainder can land exactly on TAU.
    if a >= TAU {
        a = 0.0;
    }
    a
}

/// Shortest signed angular difference from angle `a` to angle `b`, in [-π, π).
///
/// # Example
/// ```
/// use disha_nav::core::math::angle_diff;
/// use std::f32::consts::PI;
///
/// assert!((angle_diff(0.0, PI / 2.0) - PI / 2.0).abs() < 1e-6);
///
/// // Crossing the 0/2π seam takes the short way
/// let diff = angle_diff(0.1, 2.0 * PI - 0.1);
/// assert!((diff + 0.2).abs() < 1e-6);
/// ```
#[inline]
pub fn angle_diff(a: f32, b: f32) -> f32 {
    let mut d = wrap_angle(b - a);
    if d >= PI {
        d -= TAU;
    }
    d
}
