//! Conversions between floating-point values and the fixed-point formats at the core boundaries.
//!
//! The cores never touch floating point; these helpers are for callers that prepare inputs or inspect outputs.

use std::f64::consts::{PI, TAU};

use pipeflow::num::wrap;

/// Converts radians to a binary angle of `angle_width` bits, rounding to the nearest step and wrapping modulo one
/// turn.
pub fn angle_from_radians(radians: f64, angle_width: usize) -> i64 {
    let turns = radians / TAU;
    let turns = turns - turns.floor();
    wrap((turns * 2f64.powi(angle_width as i32)).round() as i64, angle_width)
}

/// Converts a binary angle of `angle_width` bits to radians in `[-π, π)`.
pub fn angle_to_radians(angle: i64, angle_width: usize) -> f64 {
    wrap(angle, angle_width) as f64 / 2f64.powi(angle_width as i32) * TAU
}

/// Converts `value` to fixed point with `fraction_bits` fractional bits, rounding to the nearest step.
pub fn to_fixed(value: f64, fraction_bits: usize) -> i64 { (value * 2f64.powi(fraction_bits as i32)).round() as i64 }

/// Converts a fixed-point value with `fraction_bits` fractional bits to `f64`.
pub fn from_fixed(value: i64, fraction_bits: usize) -> f64 { value as f64 / 2f64.powi(fraction_bits as i32) }

/// Distance in radians between two angles, taking the wraparound at `±π` into account. The result is in `[0, π]`.
pub fn angle_error(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}
