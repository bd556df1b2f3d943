//! CORDIC micro-rotation.

use pipeflow::num::{shr_floor, wrap};
use pipeflow::StageLogic;

use crate::{ConstantTable, Mode};

/// Values held by a pipeline register. x/y have the datapath width, z the angle width.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageState {
    /// x.
    pub x: i64,

    /// y.
    pub y: i64,

    /// Residual angle.
    pub z: i64,
}

/// Sign with zero counted as positive.
const fn sign(value: i64) -> i64 {
    if value < 0 {
        -1
    } else {
        1
    }
}

/// Applies micro-rotation `i` to `state`.
///
/// The direction is `sign(z)` in rotation mode and `-sign(y)` in vectoring mode. The vector turns by
/// `d * atan(2^-i)` and the residual angle moves by the opposite amount, so rotation drives z to zero and vectoring
/// drives y to zero while z collects the angle taken off the vector.
pub fn micro_rotate(state: StageState, i: usize, mode: Mode, table: &ConstantTable) -> StageState {
    let StageState { x, y, z } = state;
    let d = match mode {
        Mode::Rotation => sign(z),
        Mode::Vectoring => -sign(y),
    };

    let datapath_width = table.datapath_width();
    StageState {
        x: wrap(x - d * shr_floor(y, i), datapath_width),
        y: wrap(y + d * shr_floor(x, i), datapath_width),
        z: wrap(z - d * table.atan_constant(i), table.angle_width()),
    }
}

/// Stage logic of a CORDIC pipeline: register `i + 1` latches micro-rotation `i` of register `i`.
#[derive(Debug, Clone)]
pub struct CordicStage {
    mode: Mode,
    table: ConstantTable,
}

impl CordicStage {
    /// Creates the stage logic.
    pub fn new(mode: Mode, table: ConstantTable) -> Self { Self { mode, table } }

    /// Returns the mode.
    pub fn mode(&self) -> Mode { self.mode }

    /// Returns the constant table.
    pub fn table(&self) -> &ConstantTable { &self.table }
}

impl StageLogic for CordicStage {
    type Value = StageState;

    fn eval(&self, index: usize, value: &StageState) -> StageState {
        micro_rotate(*value, index, self.mode, &self.table)
    }
}
