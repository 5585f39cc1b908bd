// SPDX-License-Identifier: MIT
//
// Circular arithmetic for hue angles in degrees.

/// Reduce an angle to [0, 360).
#[inline]
#[must_use]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let d = degrees % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Mathematical modulo: the result has the sign of `base`, so a positive
/// base always yields a value in [0, base).
///
/// `%` on floats is a remainder and keeps the sign of the dividend;
/// `modulo(-10.0, 360.0)` is 350, where `-10.0 % 360.0` is -10.
#[inline]
#[must_use]
pub fn modulo(value: f64, base: f64) -> f64 {
    ((value % base) + base) % base
}

/// Sign of the rotation that takes `from` to `to` along the shorter arc.
///
/// Returns `1.0` when increasing `from` is shorter (or the two are exactly
/// 180° apart), `-1.0` otherwise.
#[inline]
#[must_use]
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    if sanitize_degrees(to - from) <= 180.0 { 1.0 } else { -1.0 }
}

/// Distance between two angles on the circle, in [0, 180].
#[inline]
#[must_use]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}
