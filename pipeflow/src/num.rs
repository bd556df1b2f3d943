//! Two's complement arithmetic on values of a given bit width.
//!
//! Values are carried in `i64`. A value of width `w` lies in `[-2^(w-1), 2^(w-1))`; results that leave this range
//! wrap around as a `w`-bit register would.

use static_assertions::const_assert;

/// Largest supported width.
///
/// Leaves headroom in `i64` so that the sum or difference of two in-range values never overflows before wrapping.
pub const MAX_WIDTH: usize = 62;

const_assert!(MAX_WIDTH + 2 <= i64::BITS as usize);

/// Wraps `value` into `width` bits.
///
/// # Panics
///
/// Panics if `width` is zero or larger than [`MAX_WIDTH`].
pub const fn wrap(value: i64, width: usize) -> i64 {
    assert!(width > 0 && width <= MAX_WIDTH, "unsupported width");
    let shift = (i64::BITS as usize - width) as u32;
    (value << shift) >> shift
}

/// Largest value of `width` bits.
pub const fn max_value(width: usize) -> i64 { (1 << (width - 1)) - 1 }

/// Arithmetic shift right, dropping the low bits (rounds toward negative infinity).
pub const fn shr_floor(value: i64, shift: usize) -> i64 {
    if shift >= i64::BITS as usize {
        if value < 0 {
            -1
        } else {
            0
        }
    } else {
        value >> shift
    }
}
