//! Samples at the core boundaries.
//!
//! x/y values are `xy_width`-bit fixed-point numbers with an application-chosen binary point. Angles are
//! `angle_width`-bit binary angles. Values beyond their width wrap.

/// Input of the rotation core.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationInput {
    /// Vector x.
    pub x: i64,

    /// Vector y.
    pub y: i64,

    /// Rotation angle.
    pub angle: i64,
}

/// Output of the rotation core: the rotated vector. For the input vector `(1, 0)` it is `(cos, sin)` of the angle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationOutput {
    /// Rotated x.
    pub cos: i64,

    /// Rotated y.
    pub sin: i64,
}

/// Input of the vectoring core.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectoringInput {
    /// Vector x.
    pub x: i64,

    /// Vector y.
    pub y: i64,
}

/// Output of the vectoring core.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectoringOutput {
    /// `hypot(x, y)`, scaled by `K` unless gain compensation is enabled.
    pub mag: i64,

    /// `atan2(y, x)`.
    pub theta: i64,
}
