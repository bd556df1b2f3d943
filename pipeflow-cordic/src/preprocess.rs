//! Preprocessing: brings an input sample into the range where the micro-rotations converge.
//!
//! Both preprocessors are combinational. They feed register 0 of the pipeline.

use pipeflow::num::wrap;
use pipeflow::Comb;

use crate::*;

/// Quadrant reduction for rotation mode.
///
/// `angle` is reduced modulo one turn. Its two top bits select the quadrant `q`; the vector is pre-rotated by
/// `q * π/2` with a swap/negate and the residual `angle - q * π/2` lies in `[0, π/2)`.
pub fn rotation_preprocess(x: i64, y: i64, angle: i64, table: &ConstantTable) -> StageState {
    let angle_width = table.angle_width();
    let angle = wrap(angle, angle_width);
    let quadrant = (angle >> (angle_width - 2)) & 0b11;
    let z = angle & (table.angle_half_pi() - 1);

    let (x, y) = match quadrant {
        0 => (x, y),
        1 => (-y, x),
        2 => (-x, -y),
        _ => (y, -x),
    };

    let datapath_width = table.datapath_width();
    StageState { x: wrap(x, datapath_width), y: wrap(y, datapath_width), z }
}

/// Right half-plane normalization for vectoring mode.
///
/// A vector with negative x is turned by `π` (both components negated) and the residual starts at `π` (`-π` if y is
/// negative), so the residual ends at `atan2(y, x)` in the correct half-plane. Otherwise the residual starts at 0.
pub fn vectoring_preprocess(x: i64, y: i64, table: &ConstantTable) -> StageState {
    if x >= 0 {
        return StageState { x, y, z: 0 };
    }

    let pi = table.angle_pi();
    let z = if y >= 0 { pi } else { -pi };

    let datapath_width = table.datapath_width();
    StageState { x: wrap(-x, datapath_width), y: wrap(-y, datapath_width), z: wrap(z, table.angle_width()) }
}

/// Moves a boundary x/y value onto the datapath: sign-extends it from `xy_width` bits and appends the guard bits. The
/// headroom bits above it start as sign bits.
fn widen(value: i64, config: &CordicConfig) -> i64 { wrap(value, config.xy_width) << config.guard_bits }

/// Preprocessor of the rotation core.
#[derive(Debug, Clone)]
pub struct RotationPreprocessor {
    config: CordicConfig,
    table: ConstantTable,
}

impl RotationPreprocessor {
    /// Creates the preprocessor.
    pub fn new(config: CordicConfig, table: ConstantTable) -> Self { Self { config, table } }
}

impl Comb for RotationPreprocessor {
    type I = RotationInput;
    type O = StageState;

    fn eval(&self, input: RotationInput) -> StageState {
        rotation_preprocess(widen(input.x, &self.config), widen(input.y, &self.config), input.angle, &self.table)
    }
}

/// Preprocessor of the vectoring core.
#[derive(Debug, Clone)]
pub struct VectoringPreprocessor {
    config: CordicConfig,
    table: ConstantTable,
}

impl VectoringPreprocessor {
    /// Creates the preprocessor.
    pub fn new(config: CordicConfig, table: ConstantTable) -> Self { Self { config, table } }
}

impl Comb for VectoringPreprocessor {
    type I = VectoringInput;
    type O = StageState;

    fn eval(&self, input: VectoringInput) -> StageState {
        vectoring_preprocess(widen(input.x, &self.config), widen(input.y, &self.config), &self.table)
    }
}
