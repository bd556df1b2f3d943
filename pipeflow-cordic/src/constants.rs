//! Constants of the CORDIC engine.

use std::f64::consts::TAU;

use arrayvec::ArrayVec;
use pipeflow::num;
use static_assertions::const_assert;

use crate::{ConfigError, CordicConfig};

/// Number of entries in the arctangent table, i.e. the largest supported number of iterations.
pub const ATAN_TABLE_LEN: usize = 32;

/// Register capacity of a CORDIC pipeline: the preprocessor's register and one per iteration.
pub const PIPELINE_REGISTERS: usize = ATAN_TABLE_LEN + 1;

/// Smallest angle width: two quadrant bits and at least one bit of residual.
pub const MIN_ANGLE_WIDTH: usize = 3;

/// Largest angle width.
pub const MAX_ANGLE_WIDTH: usize = num::MAX_WIDTH;

/// Largest x/y width inside the pipeline, guard and headroom bits included.
pub const MAX_DATAPATH_WIDTH: usize = num::MAX_WIDTH;

/// High-order bits added to x/y inside the pipeline. A boundary vector grows by up to `K * sqrt(2) < 4` on its way to
/// an axis.
pub const HEADROOM_BITS: usize = 2;

// Shifts by the iteration index stay below the datapath width.
const_assert!(ATAN_TABLE_LEN < MAX_DATAPATH_WIDTH);

/// Fixed-point constants for one configuration.
///
/// Angles are binary angles of `angle_width` bits: `2^angle_width` is one turn. The gain reciprocal has
/// `datapath_width - 1` fractional bits.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTable {
    atan: ArrayVec<i64, ATAN_TABLE_LEN>,
    angle_width: usize,
    datapath_width: usize,
    gain: f64,
    gain_reciprocal: i64,
}

impl ConstantTable {
    /// Builds the table for `config`.
    pub fn new(config: &CordicConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let angle_width = config.angle_width;
        let datapath_width = config.datapath_width();
        let turn = 2f64.powi(angle_width as i32);

        let atan = (0..config.iterations)
            .map(|i| (2f64.powi(-(i as i32)).atan() / TAU * turn).round() as i64)
            .collect::<ArrayVec<_, ATAN_TABLE_LEN>>();
        let gain = (0..config.iterations).map(|i| (1.0 + 4f64.powi(-(i as i32))).sqrt()).product::<f64>();
        let gain_reciprocal =
            ((2f64.powi(datapath_width as i32 - 1) / gain).round() as i64).min(num::max_value(datapath_width));

        Ok(Self { atan, angle_width, datapath_width, gain, gain_reciprocal })
    }

    /// Number of iterations covered by the table.
    pub fn iterations(&self) -> usize { self.atan.len() }

    /// Width of angles.
    pub fn angle_width(&self) -> usize { self.angle_width }

    /// Width of x/y inside the pipeline.
    pub fn datapath_width(&self) -> usize { self.datapath_width }

    /// `atan(2^-i)` as a binary angle.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`ConstantTable::iterations`].
    pub fn atan_constant(&self, i: usize) -> i64 { self.atan[i] }

    /// `π` as a binary angle. It is the same word as `-π`.
    pub fn angle_pi(&self) -> i64 { 1 << (self.angle_width - 1) }

    /// `π/2` as a binary angle.
    pub fn angle_half_pi(&self) -> i64 { 1 << (self.angle_width - 2) }

    /// CORDIC gain `K` of the configured iterations.
    pub fn gain(&self) -> f64 { self.gain }

    /// `1/K` with [`ConstantTable::gain_fraction_bits`] fractional bits.
    pub fn gain_reciprocal(&self) -> i64 { self.gain_reciprocal }

    /// Fractional bits of [`ConstantTable::gain_reciprocal`].
    pub fn gain_fraction_bits(&self) -> usize { self.datapath_width - 1 }
}
