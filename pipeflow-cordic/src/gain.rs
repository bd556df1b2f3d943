//! Output stage: gain compensation and truncation to the boundary width.
//!
//! The guard bits are dropped with an arithmetic shift, i.e. outputs are rounded toward negative infinity. Values
//! beyond `xy_width` bits wrap.

use pipeflow::num::{shr_floor, wrap};
use pipeflow::Comb;

use crate::*;

/// Scales a datapath value by `1/K` (if enabled) and truncates it to `xy_width` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GainCompensator {
    reciprocal: Option<i64>,
    fraction_bits: usize,
    guard_bits: usize,
    xy_width: usize,
}

impl GainCompensator {
    /// Creates the compensator for `config`, using the reciprocal of `table`.
    pub fn new(config: &CordicConfig, table: &ConstantTable) -> Self {
        Self {
            reciprocal: if config.gain_comp { Some(table.gain_reciprocal()) } else { None },
            fraction_bits: table.gain_fraction_bits(),
            guard_bits: config.guard_bits,
            xy_width: config.xy_width,
        }
    }

    /// Returns whether outputs are multiplied by `1/K`.
    pub fn is_enabled(&self) -> bool { self.reciprocal.is_some() }

    /// Maps a datapath value to the core boundary.
    pub fn apply(&self, value: i64) -> i64 {
        let value = match self.reciprocal {
            Some(reciprocal) => ((i128::from(value) * i128::from(reciprocal)) >> self.fraction_bits) as i64,
            None => value,
        };
        wrap(shr_floor(value, self.guard_bits), self.xy_width)
    }
}

/// Output logic of the rotation core.
#[derive(Debug, Clone)]
pub struct RotationOutputStage {
    gain: GainCompensator,
}

impl RotationOutputStage {
    /// Creates the output logic.
    pub fn new(gain: GainCompensator) -> Self { Self { gain } }
}

impl Comb for RotationOutputStage {
    type I = StageState;
    type O = RotationOutput;

    fn eval(&self, state: StageState) -> RotationOutput {
        RotationOutput { cos: self.gain.apply(state.x), sin: self.gain.apply(state.y) }
    }
}

/// Output logic of the vectoring core. The residual angle is the phase; it is not scaled.
#[derive(Debug, Clone)]
pub struct VectoringOutputStage {
    gain: GainCompensator,
}

impl VectoringOutputStage {
    /// Creates the output logic.
    pub fn new(gain: GainCompensator) -> Self { Self { gain } }
}

impl Comb for VectoringOutputStage {
    type I = StageState;
    type O = VectoringOutput;

    fn eval(&self, state: StageState) -> VectoringOutput {
        VectoringOutput { mag: self.gain.apply(state.x), theta: state.z }
    }
}
